//! Size- and time-based file rotation

use logkit::sink::{Destination, SizeRotatingFile, TimeRotatingFile};
use logkit::{setup_logging, LogConfig, Rotation, Severity};
use tests::files::LogDir;
use tests::unique_name;

#[test]
fn test_small_threshold_creates_second_backup() {
    let dir = LogDir::new();
    let config = LogConfig::new(unique_name("rotation"))
        .with_console(false)
        .with_file(dir.join("app.log"))
        .with_max_bytes(512)
        .with_backup_count(2)
        .with_level(Severity::DEBUG);
    let log = setup_logging(&config).unwrap();

    for i in 0..40 {
        log.info(format!("record number {:03} with some padding", i));
    }

    assert!(dir.join("app.log.1").exists());
    assert!(dir.join("app.log.2").exists());
    assert!(!dir.join("app.log.3").exists());
    assert!(dir.size("app.log") <= 512);
    assert!(dir.size("app.log.1") <= 512);

    let last = dir.lines("app.log");
    assert!(last
        .last()
        .unwrap()
        .ends_with("record number 039 with some padding"));
}

#[test]
fn test_zero_max_bytes_never_rotates() {
    let dir = LogDir::new();
    let file = SizeRotatingFile::open(dir.join("app.log"), 0, 2, false).unwrap();
    for _ in 0..100 {
        file.write_line("0123456789").unwrap();
    }
    assert_eq!(dir.entries(), vec!["app.log"]);
    assert_eq!(dir.size("app.log"), 1100);
}

#[test]
fn test_overwrite_truncates_at_setup() {
    let dir = LogDir::new();
    std::fs::write(dir.join("app.log"), "stale line\n").unwrap();

    let config = LogConfig::new(unique_name("overwrite"))
        .with_console(false)
        .with_file(dir.join("app.log"))
        .with_overwrite(true);
    setup_logging(&config).unwrap().info("fresh");

    let lines = dir.lines("app.log");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - fresh"));
}

#[test]
fn test_time_rotation_writes_dated_file() {
    let dir = LogDir::new();
    let config = LogConfig::new(unique_name("daily"))
        .with_console(false)
        .with_file(dir.join("logs/service.log"))
        .with_rotation(Rotation::Time);
    setup_logging(&config).unwrap().warning("rolled daily");

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let written = std::fs::read_to_string(
        dir.join("logs").join(format!("service.{}.log", today)),
    )
    .unwrap();
    assert!(written.contains("[WARNING] [daily-"));
    assert!(written.trim_end().ends_with(" - rolled daily"));
}

#[test]
fn test_time_rotating_destination_path() {
    let dir = LogDir::new();
    let file = TimeRotatingFile::open(dir.join("audit.log"), 1, false).unwrap();
    file.write_line("entry").unwrap();
    assert!(file.current_path().starts_with(dir.path()));
    assert_eq!(
        std::fs::read_to_string(file.current_path()).unwrap(),
        "entry\n"
    );
}

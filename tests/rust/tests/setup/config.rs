//! Config-driven setup

use logkit::{setup_logging, ColourChoice, LogConfig, LogkitError, Mode, Rotation, Severity};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tests::files::LogDir;
use tests::unique_name;

#[test]
fn test_config_from_json() {
    let config: LogConfig = serde_json::from_str(
        r#"{
            "name": "from-json",
            "to_console": false,
            "to_json_file": true,
            "json_file_path": "logs/app.json.log",
            "level": "WARN",
            "mode": "compact",
            "rotation": "time",
            "colour": "never",
            "backup_count": 7
        }"#,
    )
    .unwrap();

    assert_eq!(config.name, "from-json");
    assert!(!config.to_console);
    assert!(config.to_json_file);
    assert_eq!(config.level, Severity::WARNING);
    assert_eq!(config.mode, Mode::Compact);
    assert_eq!(config.rotation, Rotation::Time);
    assert_eq!(config.colour, ColourChoice::Never);
    assert_eq!(config.backup_count, 7);
    assert_eq!(config.max_bytes, 5 * 1024 * 1024);
}

#[test]
fn test_unknown_mode_is_rejected() {
    let result = serde_json::from_str::<LogConfig>(r#"{"mode": "loud"}"#);
    assert!(result.is_err());
    assert!(matches!("loud".parse::<Mode>(), Err(LogkitError::InvalidMode(_))));
}

#[test]
fn test_json_file_end_to_end() {
    let dir = LogDir::new();
    let name = unique_name("json");
    let config = LogConfig::new(&name)
        .with_console(false)
        .with_json_file(dir.join("nested/app.json.log"));
    let log = setup_logging(&config).unwrap();

    log.with_context(tests::fields([("user_id", "zoë")]))
        .info("café ouvert");
    logkit::clear_log_context();

    let raw = std::fs::read_to_string(dir.join("nested/app.json.log")).unwrap();
    assert!(raw.contains("café ouvert"));
    assert!(raw.contains("zoë"));
    assert!(!raw.contains("\\u"));

    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 1);
    let value: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["logger"], name.as_str());
    assert_eq!(value["message"], "café ouvert");
    assert_eq!(value["user_id"], "zoë");
    assert_eq!(value["session_id"], "-");
    assert_eq!(value["file"], "config.rs");
}

#[test]
fn test_unwritable_directory_fails_synchronously() {
    let dir = LogDir::new();
    std::fs::write(dir.join("occupied"), "file, not a directory").unwrap();

    let config = LogConfig::new(unique_name("unwritable"))
        .with_console(false)
        .with_file(dir.join("occupied/app.log"));
    let err = setup_logging(&config).unwrap_err();
    assert!(matches!(err, LogkitError::CreateDir { .. }), "{}", err);
}

#[test]
fn test_initial_context_is_applied() {
    let config = LogConfig::new(unique_name("initial"))
        .with_console(false)
        .with_context(tests::fields([("service", "billing")]));
    setup_logging(&config).unwrap();
    assert_eq!(
        logkit::get_log_context_value("service"),
        Some(logkit::ContextValue::from("billing"))
    );
    logkit::clear_log_context();
}

//! Logkit demo
//!
//! Writes to the console, `logs/example.log` (daily rotation) and
//! `logs/example.json`. Point `LOGKIT_CONFIG` at a JSON file to use a
//! different `LogConfig`; `LOGKIT_LEVEL`, `LOGKIT_MODE`, `LOGKIT_ROTATION` and
//! `LOGKIT_COLOUR` override single settings.

use anyhow::{Context, Result};
use logkit::{
    fields, log_duration, set_log_context, setup_logging, track_progress, ContextLayer,
    ContextualLogger, LogConfig, Mode, Rotation, Severity,
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("attempted to divide {0} by zero")]
struct DivisionByZero(i64);

fn divide(a: i64, b: i64) -> std::result::Result<i64, DivisionByZero> {
    a.checked_div(b).ok_or(DivisionByZero(a))
}

fn simulate_work() {
    thread::sleep(Duration::from_secs(1));
}

/// The demo configuration, or the JSON file named by `LOGKIT_CONFIG`
fn load_config() -> Result<LogConfig> {
    let config = match std::env::var_os("LOGKIT_CONFIG").map(PathBuf::from) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid logging config in {}", path.display()))?
        }
        None => LogConfig::new("logkit_demo")
            .with_file("logs/example.log")
            .with_json_file("logs/example.json")
            .with_overwrite(true)
            .with_level(Severity::DEBUG)
            .with_mode(Mode::Verbose)
            .with_rotation(Rotation::Time)
            .with_context(fields([("user_id", "test_user")])),
    };
    config
        .apply_env()
        .context("Invalid LOGKIT_* environment override")
}

/// Route `tracing` events through the logkit sinks. Logkit's own
/// diagnostics go to stderr.
fn init_tracing(log: &ContextualLogger) -> Result<()> {
    use tracing_subscriber::{
        filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    };

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("info").add_directive("logkit=warn".parse()?),
    };

    let diagnostics = fmt::layer()
        .with_writer(std::io::stderr)
        .compact()
        .with_target(true)
        .with_filter(filter_fn(|meta| meta.target().starts_with("logkit::")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ContextLayer::new(log))
        .with(diagnostics)
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    let config = load_config()?;
    let log = setup_logging(&config).context("Failed to configure logging")?;
    init_tracing(&log)?;

    // Global context set for all following log entries
    set_log_context(fields([
        ("user_id", "test_user"),
        ("session_id", "abc123"),
        ("request_id", "req-001"),
    ]));

    log.debug("Debugging the log setup.");
    log.info("Info message.");

    log.with_context(fields([("user_id", "bob"), ("session_id", "xyz456")]))
        .debug("This is Bob's debug");
    log.with_context(fields([("user_id", "alice"), ("session_id", "xyz789")]))
        .info("This is Alice's info");

    log.warning("Warning issued.");

    if let Err(e) = divide(1, 0) {
        log.exception("Division by zero error", &e);
    }

    log_duration(&log, Severity::INFO, "simulate_work", simulate_work);

    for _ in track_progress(0..5, &log) {
        thread::sleep(Duration::from_millis(200));
    }

    tracing::info!(attempt = 1, "Events from tracing share the same sinks.");
    logkit::log!(log, Severity::custom("shutdown", 45), "Shutting down.");

    log.critical("Critical failure.");
    log.flush();
    Ok(())
}

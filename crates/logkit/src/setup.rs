//! Logger setup

use logkit_core::{context, Severity};
use tracing::info;

use crate::config::LogConfig;
use crate::error::Result;
use crate::handle::ContextualLogger;
use crate::logger::Logger;
use crate::registry::SinkRegistry;
use crate::sink::{Sink, SyslogDestination};

/// Configure the logger named `config.name` and return a handle to it.
///
/// Every destination is opened before the logger is touched, so a failing
/// path leaves a previously configured logger as it was. Running setup again
/// for the same name replaces its sinks.
pub fn setup_logging(config: &LogConfig) -> Result<ContextualLogger> {
    let registry = SinkRegistry::from_config(config)?;

    if !config.context.is_empty() {
        context::merge(config.context.clone());
    }

    let logger = Logger::get_or_create(&config.name);
    logger.replace_sinks(registry.into_sinks());

    info!(
        target: "logkit::setup",
        logger = %config.name,
        sinks = logger.sink_count(),
        "Logging configured"
    );
    Ok(ContextualLogger::new(logger))
}

/// A logger whose only sink forwards to the syslog listener at `address`.
pub fn setup_syslog_logger(name: &str, level: Severity, address: &str) -> Result<ContextualLogger> {
    let destination = SyslogDestination::connect(address)?;
    let logger = Logger::get_or_create(name);
    logger.replace_sinks(vec![Sink::syslog(level, destination)]);
    Ok(ContextualLogger::new(logger))
}

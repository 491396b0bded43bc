//! Building the sink set described by a [`LogConfig`]

use logkit_core::{CompactRenderer, HumanRenderer, Render};
use tracing::debug;

use crate::config::{LogConfig, Mode, Rotation};
use crate::error::Result;
use crate::sink::{
    ConsoleDestination, Destination, SizeRotatingFile, Sink, SyslogDestination, TimeRotatingFile,
};

/// Sinks in the order console, file, JSON file, syslog
#[derive(Debug, Default)]
pub struct SinkRegistry {
    sinks: Vec<Sink>,
}

impl SinkRegistry {
    /// Open every destination enabled in `config`.
    ///
    /// Fails on the first destination that cannot be created. A JSON sink
    /// requested without the `json` feature is skipped with a warning.
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        let mut registry = Self::default();

        if config.to_console {
            let renderer: Box<dyn Render> = match config.mode {
                Mode::Verbose => Box::new(HumanRenderer::new().with_ansi(config.colour.enabled())),
                Mode::Compact => Box::new(CompactRenderer),
            };
            registry.push(Sink::new(
                "console",
                config.console_threshold(),
                renderer,
                ConsoleDestination,
            ));
        }

        if config.to_file {
            let destination: Box<dyn Destination> = match config.rotation {
                Rotation::Size => Box::new(SizeRotatingFile::open(
                    &config.file_path,
                    config.max_bytes,
                    config.backup_count,
                    config.overwrite,
                )?),
                Rotation::Time => Box::new(TimeRotatingFile::open(
                    &config.file_path,
                    config.backup_count,
                    config.overwrite,
                )?),
            };
            registry.push(Sink::new(
                "file",
                config.file_threshold(),
                HumanRenderer::new().with_symbol(false),
                destination,
            ));
        }

        if config.to_json_file {
            registry.push_json(config)?;
        }

        if config.to_syslog {
            let destination = SyslogDestination::connect(&config.syslog_address)?;
            registry.push(Sink::syslog(config.syslog_threshold(), destination));
        }

        debug!(
            target: "logkit::setup",
            logger = %config.name,
            sinks = ?registry.names(),
            "Configured log sinks"
        );
        Ok(registry)
    }

    #[cfg(feature = "json")]
    fn push_json(&mut self, config: &LogConfig) -> Result<()> {
        let destination = SizeRotatingFile::open(
            &config.json_file_path,
            config.max_bytes,
            config.backup_count,
            config.overwrite,
        )?;
        self.push(Sink::new(
            "json",
            config.json_threshold(),
            logkit_core::JsonRenderer,
            destination,
        ));
        Ok(())
    }

    #[cfg(not(feature = "json"))]
    fn push_json(&mut self, config: &LogConfig) -> Result<()> {
        tracing::warn!(
            target: "logkit::setup",
            logger = %config.name,
            path = ?config.json_file_path,
            "JSON file logging requested but logkit was built without the `json` feature; skipping"
        );
        Ok(())
    }

    pub fn push(&mut self, sink: Sink) {
        self.sinks.push(sink);
    }

    pub fn names(&self) -> Vec<&str> {
        self.sinks.iter().map(Sink::name).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn into_sinks(self) -> Vec<Sink> {
        self.sinks
    }
}

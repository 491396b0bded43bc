//! Sinks: a renderer, a destination and a severity floor
//!
//! Emission never fails from the caller's point of view. A destination error
//! is reported once per sink through `tracing::warn!` and then suppressed.

mod console;
mod file;
mod memory;
mod syslog;
mod timed;

pub use console::ConsoleDestination;
pub use file::SizeRotatingFile;
pub use memory::MemoryDestination;
pub use syslog::{SyslogDestination, SyslogFormat};
pub use timed::TimeRotatingFile;

use logkit_core::{EnrichedRecord, Render, Severity};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Where rendered lines end up
pub trait Destination: Send + Sync {
    /// Write one rendered record. The destination adds its own terminator.
    fn write_line(&self, line: &str) -> io::Result<()>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<D: Destination + ?Sized> Destination for Box<D> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

/// How a sink turns a record into the line its destination receives
enum Formatter {
    Render(Box<dyn Render>),
    Syslog(SyslogFormat),
}

pub struct Sink {
    name: String,
    threshold: Severity,
    formatter: Formatter,
    destination: Box<dyn Destination>,
    failed: AtomicBool,
}

impl Sink {
    pub fn new(
        name: impl Into<String>,
        threshold: Severity,
        renderer: impl Render + 'static,
        destination: impl Destination + 'static,
    ) -> Self {
        Self::build(
            name.into(),
            threshold,
            Formatter::Render(Box::new(renderer)),
            Box::new(destination),
        )
    }

    /// A syslog sink renders its own `<PRI>` framed payload
    pub fn syslog(threshold: Severity, destination: SyslogDestination) -> Self {
        Self::build(
            "syslog".to_string(),
            threshold,
            Formatter::Syslog(SyslogFormat),
            Box::new(destination),
        )
    }

    fn build(
        name: String,
        threshold: Severity,
        formatter: Formatter,
        destination: Box<dyn Destination>,
    ) -> Self {
        Self {
            name,
            threshold,
            formatter,
            destination,
            failed: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> &Severity {
        &self.threshold
    }

    pub fn accepts(&self, severity: &Severity) -> bool {
        severity.value() >= self.threshold.value()
    }

    /// Render and write `record` if it clears the threshold.
    pub fn emit(&self, record: &EnrichedRecord) {
        if !self.accepts(&record.record.severity) {
            return;
        }
        let line = match &self.formatter {
            Formatter::Render(renderer) => renderer.render(record),
            Formatter::Syslog(format) => format.payload(record),
        };
        if let Err(e) = self.destination.write_line(&line) {
            self.report(&e);
        }
    }

    pub fn flush(&self) {
        if let Err(e) = self.destination.flush() {
            self.report(&e);
        }
    }

    fn report(&self, error: &io::Error) {
        if !self.failed.swap(true, Ordering::Relaxed) {
            warn!(
                target: "logkit::sink",
                sink = %self.name,
                error = %error,
                "Log sink failed; further errors from this sink are suppressed"
            );
        }
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

//! Duration logging
//!
//! The duration line is `"{label} took {secs:.4} seconds"`. It is written when
//! the work returns, including when it returns `Err`, and while unwinding from
//! a panic.

use logkit_core::{Location, Severity};
use std::time::Instant;

use crate::handle::ContextualLogger;

/// Logs the elapsed time since creation when dropped
#[must_use = "the duration is logged when the guard is dropped"]
pub struct TimedGuard {
    log: ContextualLogger,
    severity: Severity,
    label: String,
    location: Location,
    start: Instant,
}

impl TimedGuard {
    pub(crate) fn new(
        log: ContextualLogger,
        severity: Severity,
        label: String,
        location: Location,
    ) -> Self {
        Self {
            log,
            severity,
            label,
            location,
            start: Instant::now(),
        }
    }

    /// Log at `severity` instead of INFO
    pub fn level(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Drop for TimedGuard {
    fn drop(&mut self) {
        let secs = self.start.elapsed().as_secs_f64();
        self.log.log_at(
            self.severity.clone(),
            self.location.clone(),
            duration_message(&self.label, secs),
        );
    }
}

pub(crate) fn duration_message(label: &str, secs: f64) -> String {
    format!("{} took {:.4} seconds", label, secs)
}

/// Run `work` and log how long it took. The result is returned unchanged.
#[track_caller]
pub fn log_duration<R>(
    log: &ContextualLogger,
    severity: Severity,
    label: impl Into<String>,
    work: impl FnOnce() -> R,
) -> R {
    let _guard = TimedGuard::new(log.clone(), severity, label.into(), Location::caller());
    work()
}

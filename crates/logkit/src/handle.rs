//! The handle returned by setup

use logkit_core::context;
use logkit_core::{ContextMap, ContextValue, ExceptionInfo, Location, LogRecord, Severity};
use std::error::Error;
use std::sync::Arc;

use crate::logger::Logger;
use crate::timing::TimedGuard;

/// Cheap to clone; every clone talks to the same logger.
///
/// The severity methods record file and line only. Use the logging macros
/// (`logkit::info!(log, ..)` and friends) to also get the enclosing function
/// in the `[file:line fn()]` part of human lines.
#[derive(Debug, Clone)]
pub struct ContextualLogger {
    logger: Arc<Logger>,
}

impl ContextualLogger {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Handle for the registered logger called `name`
    pub fn named(name: &str) -> Self {
        Self::new(Logger::get_or_create(name))
    }

    pub fn name(&self) -> &str {
        self.logger.name()
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Merge `fields` into the calling thread's context.
    ///
    /// The fields stay in place after the next emission.
    pub fn with_context(&self, fields: ContextMap) -> &Self {
        context::merge(fields);
        self
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(Severity::DEBUG, Location::caller(), message.into(), None);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::INFO, Location::caller(), message.into(), None);
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(Severity::WARNING, Location::caller(), message.into(), None);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::ERROR, Location::caller(), message.into(), None);
    }

    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.emit(Severity::CRITICAL, Location::caller(), message.into(), None);
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.emit(severity, Location::caller(), message.into(), None);
    }

    /// Log at ERROR with `err`, its `source()` chain and a backtrace attached.
    #[track_caller]
    pub fn exception<E>(&self, message: impl Into<String>, err: &E)
    where
        E: Error + ?Sized,
    {
        self.emit(
            Severity::ERROR,
            Location::caller(),
            message.into(),
            Some(ExceptionInfo::capture(err)),
        );
    }

    /// Emit with an explicit location. Used by the logging macros.
    pub fn log_at(&self, severity: Severity, location: Location, message: impl Into<String>) {
        self.emit(severity, location, message.into(), None);
    }

    /// Log how long the guard lived, at INFO, when it is dropped.
    #[track_caller]
    pub fn timed(&self, label: impl Into<String>) -> TimedGuard {
        TimedGuard::new(self.clone(), Severity::INFO, label.into(), Location::caller())
    }

    pub fn flush(&self) {
        self.logger.flush();
    }

    fn emit(
        &self,
        severity: Severity,
        location: Location,
        message: String,
        exception: Option<ExceptionInfo>,
    ) {
        let mut record = LogRecord::new(severity, self.logger.name(), location, message);
        record.exception = exception;
        self.logger.log(record);
    }
}

/// Replace the calling thread's context with `fields`.
pub fn set_log_context(fields: ContextMap) {
    context::set(fields);
}

/// Overlay `fields` onto the calling thread's context.
pub fn merge_log_context(fields: ContextMap) {
    context::merge(fields);
}

pub fn clear_log_context() {
    context::clear();
}

/// The calling thread's context with defaults filled in
pub fn get_log_context() -> ContextMap {
    context::snapshot()
}

/// One field of [`get_log_context`]
pub fn get_log_context_value(key: &str) -> Option<ContextValue> {
    context::get(key)
}

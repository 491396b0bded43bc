//! Log records

use chrono::{DateTime, Local};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::Write as _;

use crate::Severity;

/// Where a record was emitted from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub function: Option<String>,
    pub module_path: Option<String>,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            function: None,
            module_path: None,
        }
    }

    /// Location of the caller of a `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = Some(module_path.into());
        self
    }

    /// File name without directories
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file)
    }
}

/// A captured failure: type, message, cause chain and backtrace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionInfo {
    pub type_name: String,
    pub message: String,
    pub causes: Vec<String>,
    pub backtrace: Option<String>,
}

impl ExceptionInfo {
    /// Capture `err` together with a backtrace of the current thread.
    pub fn capture<E>(err: &E) -> Self
    where
        E: Error + ?Sized,
    {
        let backtrace = Backtrace::force_capture();
        let backtrace = match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };
        Self {
            backtrace,
            ..Self::without_backtrace(err)
        }
    }

    /// Capture `err` without walking the stack
    pub fn without_backtrace<E>(err: &E) -> Self
    where
        E: Error + ?Sized,
    {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            type_name: short_type_name(std::any::type_name::<E>()),
            message: err.to_string(),
            causes,
            backtrace: None,
        }
    }

    /// Multi-line rendering used by every renderer
    pub fn render(&self) -> String {
        let mut out = format!("{}: {}", self.type_name, self.message);
        for cause in &self.causes {
            let _ = write!(out, "\n  caused by: {}", cause);
        }
        if let Some(bt) = &self.backtrace {
            out.push_str("\nstack backtrace:\n");
            out.push_str(bt.trim_end());
        }
        out
    }
}

/// `std::io::error::Error` -> `Error`, `dyn core::error::Error` -> `dyn Error`
fn short_type_name(full: &str) -> String {
    let (prefix, rest) = match full.strip_prefix("dyn ") {
        Some(rest) => ("dyn ", rest),
        None => ("", full),
    };
    let base = rest.split(['<', ' ', '+']).next().unwrap_or(rest);
    let last = base.rsplit("::").next().unwrap_or(base);
    format!("{}{}", prefix, last)
}

/// One emission
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub logger: String,
    pub location: Location,
    pub message: String,
    pub exception: Option<ExceptionInfo>,
}

impl LogRecord {
    pub fn new(
        severity: Severity,
        logger: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            logger: logger.into(),
            location,
            message: message.into(),
            exception: None,
        }
    }

    pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

//! # Logkit
//!
//! One call configures a named logger with any mix of:
//!
//! - Console output, verbose and coloured or compact
//! - A size- or time-rotating text file (daily files are named by UTC date,
//!   records inside carry local timestamps)
//! - A rotating JSON lines file (feature `json`)
//! - UDP syslog
//!
//! Every record carries the calling thread's context fields (`user_id`,
//! `session_id`, `request_id`, `hostname`, `env`, `pid` and anything else set
//! with [`set_log_context`] or [`ContextualLogger::with_context`]).
//!
//! ```no_run
//! use logkit::{fields, setup_logging, LogConfig, Severity};
//!
//! let log = setup_logging(
//!     &LogConfig::new("app")
//!         .with_file("logs/app.log")
//!         .with_level(Severity::DEBUG),
//! )?;
//! log.with_context(fields([("user_id", "bob")])).info("signed in");
//! # Ok::<(), logkit::LogkitError>(())
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod layer;
pub mod logger;
mod macros;
pub mod progress;
pub mod registry;
pub mod setup;
pub mod sink;
pub mod timing;

pub use config::{ColourChoice, LogConfig, Mode, Rotation};
pub use error::{LogkitError, Result};
pub use handle::{
    clear_log_context, get_log_context, get_log_context_value, merge_log_context,
    set_log_context, ContextualLogger,
};
pub use layer::ContextLayer;
pub use logger::Logger;
pub use progress::{track_progress, Progress};
pub use registry::SinkRegistry;
pub use setup::{setup_logging, setup_syslog_logger};
pub use timing::{log_duration, TimedGuard};

pub use logkit_core::context::{fields, new_request_id, scoped};
pub use logkit_core::{
    enrich, enrich_with, symbol_for, CompactRenderer, ContextMap, ContextValue, EnrichedRecord,
    ExceptionInfo, HumanRenderer, Location, LogRecord, Render, Severity,
};
#[cfg(feature = "json")]
pub use logkit_core::JsonRenderer;

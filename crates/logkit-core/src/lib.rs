//! # Logkit Core
//!
//! The parts of logkit that do no I/O:
//!
//! - `context` - thread-scoped context fields with per-process defaults
//! - `severity` - ordered, extensible log levels and their symbols
//! - `record` - log records, source locations, captured failures
//! - `enrich` - merging context onto a record, once per emission
//! - `render` - human, compact and JSON renderers

pub mod context;
pub mod enrich;
pub mod record;
pub mod render;
pub mod severity;

pub use context::{ContextMap, ContextValue};
pub use enrich::{enrich, enrich_with, EnrichedRecord};
pub use record::{ExceptionInfo, Location, LogRecord};
#[cfg(feature = "json")]
pub use render::JsonRenderer;
pub use render::{CompactRenderer, HumanRenderer, Render};
pub use severity::{symbol_for, Severity};

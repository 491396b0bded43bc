//! Bridge from `tracing` events into a logkit logger
//!
//! ```no_run
//! use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
//!
//! let log = logkit::setup_logging(&logkit::LogConfig::new("app")).unwrap();
//! tracing_subscriber::registry()
//!     .with(logkit::ContextLayer::new(&log))
//!     .init();
//! tracing::info!(user_id = "bob", "handled by logkit sinks");
//! ```

use logkit_core::{ContextMap, ContextValue, Location, LogRecord, Severity};
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::handle::ContextualLogger;
use crate::logger::Logger;

/// Targets of logkit's own diagnostics
const INTERNAL_TARGETS: [&str; 2] = ["logkit", "logkit_core"];

/// Forwards every `tracing` event to one logger.
///
/// Event fields are layered over the thread's context for that record only.
/// The `message` field becomes the record message.
pub struct ContextLayer {
    logger: Arc<Logger>,
}

impl ContextLayer {
    pub fn new(log: &ContextualLogger) -> Self {
        Self {
            logger: log.logger().clone(),
        }
    }
}

impl<S: Subscriber> Layer<S> for ContextLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if is_internal(meta.target()) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut location = Location::new(
            meta.file().unwrap_or(meta.target()),
            meta.line().unwrap_or(0),
        );
        if let Some(module_path) = meta.module_path() {
            location = location.with_module_path(module_path);
        }

        let record = LogRecord::new(
            severity_for(meta.level()),
            self.logger.name(),
            location,
            visitor.message.unwrap_or_default(),
        );
        self.logger.log_with(record, visitor.fields);
    }
}

fn is_internal(target: &str) -> bool {
    INTERNAL_TARGETS.iter().any(|internal| {
        target
            .strip_prefix(internal)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::TRACE => Severity::TRACE,
        Level::DEBUG => Severity::DEBUG,
        Level::INFO => Severity::INFO,
        Level::WARN => Severity::WARNING,
        Level::ERROR => Severity::ERROR,
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: ContextMap,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: ContextValue) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, ContextValue::Int(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let value = match i64::try_from(value) {
            Ok(v) => ContextValue::Int(v),
            Err(_) => ContextValue::Str(value.to_string()),
        };
        self.insert(field, value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, ContextValue::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, ContextValue::Str(format!("{:?}", value)));
    }
}

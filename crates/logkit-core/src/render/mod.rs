//! Renderers turn an [`EnrichedRecord`] into one output-ready string.
//!
//! - [`HumanRenderer`] - timestamp, level, logger, location, context, message
//! - [`CompactRenderer`] - `[LEVEL] message`
//! - [`JsonRenderer`] - one JSON object per record (feature `json`)

mod compact;
mod human;
#[cfg(feature = "json")]
mod json;

pub use compact::CompactRenderer;
pub use human::HumanRenderer;
#[cfg(feature = "json")]
pub use json::JsonRenderer;

use crate::EnrichedRecord;

/// Timestamp layout of the text renderers
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A pure formatting strategy: no I/O, no trailing newline.
pub trait Render: Send + Sync {
    fn render(&self, record: &EnrichedRecord) -> String;
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn render(&self, record: &EnrichedRecord) -> String {
        (**self).render(record)
    }
}

impl<R: Render + ?Sized> Render for std::sync::Arc<R> {
    fn render(&self, record: &EnrichedRecord) -> String {
        (**self).render(record)
    }
}

/// Append the exception block, if any, on the lines below `line`
pub(crate) fn push_exception(line: &mut String, record: &EnrichedRecord) {
    if let Some(exc) = &record.record.exception {
        line.push('\n');
        line.push_str(&exc.render());
    }
}

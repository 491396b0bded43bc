use super::{push_exception, Render};
use crate::EnrichedRecord;

/// `[LEVEL] message`, for quiet consoles
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactRenderer;

impl Render for CompactRenderer {
    fn render(&self, record: &EnrichedRecord) -> String {
        let mut line = format!("[{}] {}", record.record.severity, record.record.message);
        push_exception(&mut line, record);
        line
    }
}

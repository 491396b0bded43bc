use serde_json::{Map, Value};

use super::Render;
use crate::EnrichedRecord;

/// Keys written by the renderer itself. Context fields never replace them.
const STANDARD_KEYS: [&str; 9] = [
    "timestamp",
    "level",
    "logger",
    "message",
    "file",
    "line",
    "function",
    "symbol",
    "exc_info",
];

/// One JSON object per record, context fields flattened at the top level.
///
/// Unlike the text renderers, blank context fields are kept. Non-ASCII text is
/// written as UTF-8, not `\u` escapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn to_value(record: &EnrichedRecord) -> Value {
        let rec = &record.record;
        let mut map = Map::new();
        map.insert("timestamp".into(), Value::String(rec.timestamp.to_rfc3339()));
        map.insert("level".into(), Value::String(rec.severity.to_string()));
        map.insert("logger".into(), Value::String(rec.logger.clone()));
        map.insert("message".into(), Value::String(rec.message.clone()));
        map.insert(
            "file".into(),
            Value::String(rec.location.file_name().to_string()),
        );
        map.insert("line".into(), Value::from(rec.location.line));
        if let Some(function) = &rec.location.function {
            map.insert("function".into(), Value::String(function.clone()));
        }
        map.insert("symbol".into(), Value::String(record.symbol.to_string()));

        for (key, value) in record.ordered_fields() {
            if STANDARD_KEYS.contains(&key) {
                continue;
            }
            // untagged: strings stay strings, integers become numbers
            let value = serde_json::to_value(value).unwrap_or(Value::Null);
            map.insert(key.to_string(), value);
        }

        if let Some(exc) = &rec.exception {
            map.insert("exc_info".into(), Value::String(exc.render()));
        }
        Value::Object(map)
    }
}

impl Render for JsonRenderer {
    fn render(&self, record: &EnrichedRecord) -> String {
        Self::to_value(record).to_string()
    }
}

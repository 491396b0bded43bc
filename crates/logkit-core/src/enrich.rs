//! Record enrichment
//!
//! A record is enriched exactly once, before any renderer sees it. The
//! resulting [`EnrichedRecord`] is shared by reference across every sink.

use crate::context::{self, ContextMap};
use crate::record::LogRecord;
use crate::severity::symbol_for;

/// A record plus the context captured at emission time
#[derive(Debug, Clone)]
pub struct EnrichedRecord {
    pub record: LogRecord,
    pub fields: ContextMap,
    pub symbol: &'static str,
}

impl EnrichedRecord {
    /// Fields in rendering order: well-known keys first, then the rest by key.
    pub fn ordered_fields(&self) -> impl Iterator<Item = (&str, &context::ContextValue)> {
        let known = context::keys::WELL_KNOWN
            .iter()
            .filter_map(move |k| self.fields.get_key_value(*k));
        let rest = self
            .fields
            .iter()
            .filter(|(k, _)| !context::keys::WELL_KNOWN.contains(&k.as_str()));
        known.chain(rest).map(|(k, v)| (k.as_str(), v))
    }
}

/// Attach the current thread's context snapshot and the level symbol.
pub fn enrich(record: LogRecord) -> EnrichedRecord {
    enrich_with(record, ContextMap::new())
}

/// Like [`enrich`], with event-local fields layered over the context.
pub fn enrich_with(record: LogRecord, extra: ContextMap) -> EnrichedRecord {
    let mut fields = context::snapshot();
    fields.extend(extra);
    let symbol = symbol_for(&record.severity);
    EnrichedRecord {
        record,
        fields,
        symbol,
    }
}

//! Named loggers and the process-wide registry
//!
//! A logger owns its sink set. Setting up a name that already exists swaps
//! the sinks of the existing logger, so handles handed out earlier keep
//! working and no sink is ever attached twice.

use logkit_core::{enrich_with, ContextMap, EnrichedRecord, LogRecord};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::sink::Sink;

static LOGGERS: LazyLock<RwLock<HashMap<String, Arc<Logger>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

#[derive(Debug)]
pub struct Logger {
    name: String,
    sinks: RwLock<Vec<Sink>>,
}

impl Logger {
    /// A logger outside the registry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sinks: RwLock::new(Vec::new()),
        }
    }

    /// The registered logger called `name`, created empty on first use
    pub fn get_or_create(name: &str) -> Arc<Logger> {
        // Fast path: logger exists
        if let Some(logger) = LOGGERS.read().get(name) {
            return logger.clone();
        }

        let mut loggers = LOGGERS.write();
        loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name)))
            .clone()
    }

    /// The registered logger called `name`, if setup ever ran for it
    pub fn get(name: &str) -> Option<Arc<Logger>> {
        LOGGERS.read().get(name).cloned()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Swap in a new sink set. The previous sinks are flushed and dropped.
    pub fn replace_sinks(&self, sinks: Vec<Sink>) {
        let previous = std::mem::replace(&mut *self.sinks.write(), sinks);
        for sink in &previous {
            sink.flush();
        }
    }

    pub fn add_sink(&self, sink: Sink) {
        self.sinks.write().push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn sink_names(&self) -> Vec<String> {
        self.sinks
            .read()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Enrich `record` once and hand it to every sink.
    pub fn log(&self, record: LogRecord) {
        self.log_with(record, ContextMap::new());
    }

    /// Like [`Logger::log`] with event-local fields over the thread context
    pub fn log_with(&self, record: LogRecord, extra: ContextMap) {
        let sinks = self.sinks.read();
        if !sinks.iter().any(|s| s.accepts(&record.severity)) {
            return;
        }
        let enriched = enrich_with(record, extra);
        self.dispatch(&sinks, &enriched);
    }

    fn dispatch(&self, sinks: &[Sink], record: &EnrichedRecord) {
        for sink in sinks {
            sink.emit(record);
        }
    }

    pub fn flush(&self) {
        for sink in self.sinks.read().iter() {
            sink.flush();
        }
    }
}

//! Shared test utilities and fixtures for Logkit integration tests.

pub use logkit::{
    fields, ContextMap, ContextValue, ContextualLogger, LogConfig, Logger, Severity,
};

/// In-memory logger harness
pub mod capture {
    use logkit::sink::{MemoryDestination, Sink};
    use logkit::{CompactRenderer, ContextualLogger, HumanRenderer, Logger, Render, Severity};
    use std::sync::Arc;

    /// A logger outside the global registry, writing to memory
    pub struct CapturedLogger {
        pub log: ContextualLogger,
        pub memory: MemoryDestination,
    }

    impl CapturedLogger {
        pub fn new(name: &str, threshold: Severity, renderer: impl Render + 'static) -> Self {
            let logger = Arc::new(Logger::new(name));
            let memory = MemoryDestination::new();
            logger.add_sink(Sink::new("memory", threshold, renderer, memory.clone()));
            Self {
                log: ContextualLogger::new(logger),
                memory,
            }
        }

        /// Plain human lines, everything from DEBUG up
        pub fn human(name: &str) -> Self {
            Self::new(name, Severity::DEBUG, HumanRenderer::new())
        }

        /// `[LEVEL] message` lines, everything from DEBUG up
        pub fn compact(name: &str) -> Self {
            Self::new(name, Severity::DEBUG, CompactRenderer)
        }

        pub fn lines(&self) -> Vec<String> {
            self.memory.lines()
        }
    }
}

/// Fixed records for renderer tests
pub mod fixtures {
    use chrono::{DateTime, Local, TimeZone};
    use logkit::{enrich, EnrichedRecord, Location, LogRecord, Severity};

    /// 2026-10-14 09:30:00 local time
    pub fn timestamp() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 14, 9, 30, 0)
            .single()
            .expect("unambiguous local time")
    }

    pub fn record(severity: Severity, message: &str) -> LogRecord {
        LogRecord::new(
            severity,
            "fixture",
            Location::new("src/worker.rs", 17).with_function("process"),
            message,
        )
        .with_timestamp(timestamp())
    }

    /// `record` enriched with the calling thread's current context
    pub fn enriched(severity: Severity, message: &str) -> EnrichedRecord {
        enrich(record(severity, message))
    }
}

/// Scratch log directories
pub mod files {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub struct LogDir {
        dir: TempDir,
    }

    impl LogDir {
        pub fn new() -> Self {
            Self {
                dir: TempDir::new().expect("Failed to create temp dir"),
            }
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }

        pub fn join(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        /// Lines of `name`, empty when the file does not exist
        pub fn lines(&self, name: &str) -> Vec<String> {
            fs::read_to_string(self.join(name))
                .map(|s| s.lines().map(str::to_string).collect())
                .unwrap_or_default()
        }

        pub fn size(&self, name: &str) -> u64 {
            fs::metadata(self.join(name)).map(|m| m.len()).unwrap_or(0)
        }

        /// File names in the directory, sorted
        pub fn entries(&self) -> Vec<String> {
            let mut names: Vec<String> = fs::read_dir(self.path())
                .expect("Failed to read temp dir")
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            names
        }
    }

    impl Default for LogDir {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Generate a logger name no other test uses
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, logkit::new_request_id())
}

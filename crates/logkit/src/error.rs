//! Setup errors
//!
//! Everything here is raised synchronously by setup. Nothing on the emission
//! path returns an error to the caller.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LogkitError {
    #[error("failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create time-rotating log file: {0}")]
    TimeRotation(#[from] tracing_appender::rolling::InitError),

    #[error("invalid log file path {0:?}")]
    InvalidPath(PathBuf),

    #[error("syslog endpoint {address}: {source}")]
    Syslog {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown log level {0:?}")]
    InvalidLevel(String),

    #[error("unknown console mode {0:?} (expected \"verbose\" or \"compact\")")]
    InvalidMode(String),

    #[error("unknown rotation {0:?} (expected \"size\" or \"time\")")]
    InvalidRotation(String),

    #[error("unknown colour choice {0:?} (expected \"auto\", \"always\" or \"never\")")]
    InvalidColour(String),
}

pub type Result<T> = std::result::Result<T, LogkitError>;

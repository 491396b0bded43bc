//! Logging configuration
//!
//! Defaults match the original toolkit: console on, INFO, verbose console,
//! size-based rotation at 5 MiB keeping two backups.

use logkit_core::{ContextMap, Severity};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{LogkitError, Result};

/// Default syslog endpoint
pub const DEFAULT_SYSLOG_ADDRESS: &str = "localhost:514";

/// Console renderer selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Timestamp, level, logger, location and context fields
    #[default]
    Verbose,
    /// `[LEVEL] message`
    Compact,
}

impl FromStr for Mode {
    type Err = LogkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "compact" => Ok(Self::Compact),
            _ => Err(LogkitError::InvalidMode(s.to_string())),
        }
    }
}

/// File rotation policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// Rotate once the file would exceed `max_bytes`
    #[default]
    Size,
    /// Rotate at midnight
    Time,
}

impl FromStr for Rotation {
    type Err = LogkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "size" => Ok(Self::Size),
            "time" => Ok(Self::Time),
            _ => Err(LogkitError::InvalidRotation(s.to_string())),
        }
    }
}

/// Whether the console renderer emits ANSI colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourChoice {
    /// Colour when stdout is a terminal and `NO_COLOR`/`CLICOLOR` allow it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColourChoice {
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColourChoice {
    type Err = LogkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(LogkitError::InvalidColour(s.to_string())),
        }
    }
}

/// Full sink configuration for one logger
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Logger identity. Setup with the same name replaces the previous sinks.
    pub name: String,

    /// Truncate file destinations at setup instead of appending
    pub overwrite: bool,

    pub to_console: bool,
    pub to_file: bool,
    pub file_path: PathBuf,
    pub to_json_file: bool,
    pub json_file_path: PathBuf,
    pub to_syslog: bool,
    /// `host:port` of a UDP syslog listener
    pub syslog_address: String,

    /// Floor for every sink without its own override
    pub level: Severity,
    pub console_level: Option<Severity>,
    pub file_level: Option<Severity>,
    pub json_level: Option<Severity>,
    pub syslog_level: Option<Severity>,

    pub mode: Mode,
    pub colour: ColourChoice,

    pub rotation: Rotation,
    /// Size threshold for `Rotation::Size` and for the JSON file
    pub max_bytes: u64,
    /// Rotated files kept next to the active one
    pub backup_count: usize,

    /// Fields merged into the calling thread's context at setup
    pub context: ContextMap,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            name: "root".to_string(),
            overwrite: false,
            to_console: true,
            to_file: false,
            file_path: PathBuf::from("app.log"),
            to_json_file: false,
            json_file_path: PathBuf::from("app.json.log"),
            to_syslog: false,
            syslog_address: DEFAULT_SYSLOG_ADDRESS.to_string(),
            level: Severity::INFO,
            console_level: None,
            file_level: None,
            json_level: None,
            syslog_level: None,
            mode: Mode::Verbose,
            colour: ColourChoice::Auto,
            rotation: Rotation::Size,
            max_bytes: 5 * 1024 * 1024, // 5MB
            backup_count: 2,
            context: ContextMap::new(),
        }
    }
}

impl LogConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `LOGKIT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Overlay `LOGKIT_LEVEL`, `LOGKIT_MODE`, `LOGKIT_ROTATION` and `LOGKIT_COLOUR`.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(level) = lookup("LOGKIT_LEVEL") {
            self.level = Severity::parse(&level).ok_or(LogkitError::InvalidLevel(level))?;
        }
        if let Some(mode) = lookup("LOGKIT_MODE") {
            self.mode = mode.parse()?;
        }
        if let Some(rotation) = lookup("LOGKIT_ROTATION") {
            self.rotation = rotation.parse()?;
        }
        if let Some(colour) = lookup("LOGKIT_COLOUR") {
            self.colour = colour.parse()?;
        }
        Ok(self)
    }

    pub fn with_console(mut self, enabled: bool) -> Self {
        self.to_console = enabled;
        self
    }

    /// Enable the text file sink at `path`
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.to_file = true;
        self.file_path = path.into();
        self
    }

    /// Enable the JSON lines sink at `path`
    pub fn with_json_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.to_json_file = true;
        self.json_file_path = path.into();
        self
    }

    /// Enable syslog forwarding to `address`
    pub fn with_syslog(mut self, address: impl Into<String>) -> Self {
        self.to_syslog = true;
        self.syslog_address = address.into();
        self
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_console_level(mut self, level: Severity) -> Self {
        self.console_level = Some(level);
        self
    }

    pub fn with_file_level(mut self, level: Severity) -> Self {
        self.file_level = Some(level);
        self
    }

    pub fn with_json_level(mut self, level: Severity) -> Self {
        self.json_level = Some(level);
        self
    }

    pub fn with_syslog_level(mut self, level: Severity) -> Self {
        self.syslog_level = Some(level);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_colour(mut self, colour: ColourChoice) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_backup_count(mut self, backup_count: usize) -> Self {
        self.backup_count = backup_count;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_context(mut self, context: ContextMap) -> Self {
        self.context = context;
        self
    }

    pub fn console_threshold(&self) -> Severity {
        self.console_level.clone().unwrap_or_else(|| self.level.clone())
    }

    pub fn file_threshold(&self) -> Severity {
        self.file_level.clone().unwrap_or_else(|| self.level.clone())
    }

    pub fn json_threshold(&self) -> Severity {
        self.json_level.clone().unwrap_or_else(|| self.level.clone())
    }

    pub fn syslog_threshold(&self) -> Severity {
        self.syslog_level.clone().unwrap_or_else(|| self.level.clone())
    }
}

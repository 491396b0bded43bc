//! Log severity levels
//!
//! Severities are ordered by their numeric value. The five built-in levels use
//! the conventional 10/20/30/40/50 spacing so custom levels can slot between
//! them (e.g. `Severity::custom("SECURITY", 35)`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A named severity with a numeric rank
#[derive(Debug, Clone)]
pub struct Severity {
    value: u8,
    name: Cow<'static, str>,
}

impl Severity {
    /// Only produced by events bridged in from `tracing`
    pub const TRACE: Severity = Severity::builtin(5, "TRACE");
    pub const DEBUG: Severity = Severity::builtin(10, "DEBUG");
    pub const INFO: Severity = Severity::builtin(20, "INFO");
    pub const WARNING: Severity = Severity::builtin(30, "WARNING");
    pub const ERROR: Severity = Severity::builtin(40, "ERROR");
    pub const CRITICAL: Severity = Severity::builtin(50, "CRITICAL");

    const fn builtin(value: u8, name: &'static str) -> Self {
        Self {
            value,
            name: Cow::Borrowed(name),
        }
    }

    /// Create a custom level. The name is upper-cased.
    pub fn custom(name: impl AsRef<str>, value: u8) -> Self {
        Self {
            value,
            name: Cow::Owned(name.as_ref().to_uppercase()),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse a level name (case-insensitive) or a numeric rank.
    ///
    /// Accepts the aliases `warn` and `fatal`.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Some(Self::from_value(value));
        }
        match trimmed.to_uppercase().as_str() {
            "TRACE" => Some(Self::TRACE),
            "DEBUG" => Some(Self::DEBUG),
            "INFO" => Some(Self::INFO),
            "WARNING" | "WARN" => Some(Self::WARNING),
            "ERROR" => Some(Self::ERROR),
            "CRITICAL" | "FATAL" => Some(Self::CRITICAL),
            _ => None,
        }
    }

    /// Map a numeric rank to the built-in level of that rank, or an anonymous
    /// `LEVEL <n>` custom level.
    pub fn from_value(value: u8) -> Self {
        [
            Self::TRACE,
            Self::DEBUG,
            Self::INFO,
            Self::WARNING,
            Self::ERROR,
            Self::CRITICAL,
        ]
        .into_iter()
        .find(|s| s.value == value)
        .unwrap_or_else(|| Self::custom(format!("LEVEL {}", value), value))
    }
}

impl PartialEq for Severity {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.name == other.name
    }
}

impl Eq for Severity {}

impl Hash for Severity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.name.hash(state);
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| s.to_string())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown log level {:?}", raw)))
    }
}

/// Symbol shown next to the level name in human output.
///
/// Unrecognized levels get an empty symbol.
pub fn symbol_for(severity: &Severity) -> &'static str {
    match severity.name() {
        "DEBUG" => "🐛",
        "INFO" => "ℹ️",
        "WARNING" => "⚠️",
        "ERROR" => "❌",
        "CRITICAL" => "💥",
        "SYSTEM" => "🖥️",
        "SECURITY" => "🔐",
        "NETWORK" => "🌐",
        "DATABASE" => "🗄️",
        "STARTUP" => "🚀",
        "SHUTDOWN" => "🛑",
        _ => "",
    }
}

//! Thread-scoped log context
//!
//! Every thread owns its own context map. Fields written on one thread are
//! never visible to another, so no locking is involved.
//!
//! Reads always return a copy with the process defaults filled in for absent
//! keys:
//! - `user_id`, `session_id`, `request_id` default to the placeholder `"-"`
//! - `hostname`, `env` (from `APP_ENV`, else `"dev"`) and `pid` are computed
//!   once per process

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Placeholder value for unset identity fields
pub const PLACEHOLDER: &str = "-";

/// Environment variable consulted for the `env` default
pub const ENV_VAR: &str = "APP_ENV";

/// Fallback for `env` when [`ENV_VAR`] is unset
pub const DEFAULT_ENV: &str = "dev";

pub mod keys {
    pub const USER_ID: &str = "user_id";
    pub const SESSION_ID: &str = "session_id";
    pub const REQUEST_ID: &str = "request_id";
    pub const HOSTNAME: &str = "hostname";
    pub const ENV: &str = "env";
    pub const PID: &str = "pid";

    /// Rendering order for the well-known keys
    pub const WELL_KNOWN: [&str; 6] = [USER_ID, SESSION_ID, REQUEST_ID, HOSTNAME, ENV, PID];
}

/// A context field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Str(String),
    Int(i64),
}

impl ContextValue {
    /// True for values the human renderers leave out: empty or `"-"`
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Str(s) => {
                let s = s.trim();
                s.is_empty() || s == PLACEHOLDER
            }
            Self::Int(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ContextValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ContextValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for ContextValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

/// Context fields keyed by name
pub type ContextMap = BTreeMap<String, ContextValue>;

/// Build a [`ContextMap`] from `(key, value)` pairs.
pub fn fields<K, V, I>(pairs: I) -> ContextMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ContextValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Per-process default fields
#[derive(Debug, Clone)]
pub struct Defaults {
    pub hostname: String,
    pub env: String,
    pub pid: u32,
}

impl Defaults {
    fn compute() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let hostname = gethostname::gethostname().to_string_lossy().into_owned();
        let env = lookup(ENV_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENV.to_string());
        Self {
            hostname,
            env,
            pid: std::process::id(),
        }
    }

    fn fill(&self, map: &mut ContextMap) {
        for key in [keys::USER_ID, keys::SESSION_ID, keys::REQUEST_ID] {
            map.entry(key.to_string())
                .or_insert_with(|| ContextValue::from(PLACEHOLDER));
        }
        map.entry(keys::HOSTNAME.to_string())
            .or_insert_with(|| ContextValue::from(self.hostname.as_str()));
        map.entry(keys::ENV.to_string())
            .or_insert_with(|| ContextValue::from(self.env.as_str()));
        map.entry(keys::PID.to_string())
            .or_insert_with(|| ContextValue::from(self.pid));
    }
}

static DEFAULTS: OnceLock<Defaults> = OnceLock::new();

/// Process defaults, computed on first use
pub fn defaults() -> &'static Defaults {
    DEFAULTS.get_or_init(Defaults::compute)
}

thread_local! {
    static CONTEXT: RefCell<ContextMap> = RefCell::new(ContextMap::new());
}

/// Replace the current thread's context with `fields`.
pub fn set(fields: ContextMap) {
    CONTEXT.with(|ctx| *ctx.borrow_mut() = fields);
}

/// Overlay `fields` onto the current thread's context; new keys win.
pub fn merge(fields: ContextMap) {
    CONTEXT.with(|ctx| ctx.borrow_mut().extend(fields));
}

/// Drop every field on the current thread. Defaults still show up on read.
pub fn clear() {
    CONTEXT.with(|ctx| ctx.borrow_mut().clear());
}

/// Copy of the current thread's context with defaults filled in
pub fn snapshot() -> ContextMap {
    let mut map = CONTEXT.with(|ctx| ctx.borrow().clone());
    defaults().fill(&mut map);
    map
}

/// One field of [`snapshot`]
pub fn get(key: &str) -> Option<ContextValue> {
    CONTEXT
        .with(|ctx| ctx.borrow().get(key).cloned())
        .or_else(|| snapshot().remove(key))
}

/// Run `f` with `fields` merged in, then restore the previous context.
///
/// The previous context is restored even if `f` panics.
pub fn scoped<R>(fields: ContextMap, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<ContextMap>);

    impl Drop for Restore {
        fn drop(&mut self) {
            if let Some(previous) = self.0.take() {
                set(previous);
            }
        }
    }

    let previous = CONTEXT.with(|ctx| ctx.borrow().clone());
    let _restore = Restore(Some(previous));
    merge(fields);
    f()
}

/// A fresh request id
pub fn new_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

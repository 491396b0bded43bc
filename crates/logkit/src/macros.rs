//! Logging macros
//!
//! Like the handle methods, plus the name of the enclosing function:
//!
//! ```no_run
//! let log = logkit::setup_logging(&logkit::LogConfig::new("app")).unwrap();
//! let user = "bob";
//! logkit::info!(log, "signed in as {}", user);
//! ```

/// Name of the enclosing function, without its module path
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        $crate::Location::new(file!(), line!())
            .with_function($crate::__function_name!())
            .with_module_path(module_path!())
    };
}

/// Log at an explicit severity: `log!(handle, Severity::INFO, "fmt", args..)`
#[macro_export]
macro_rules! log {
    ($handle:expr, $severity:expr, $($arg:tt)+) => {
        $handle.log_at($severity, $crate::__location!(), format!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log!($handle, $crate::Severity::DEBUG, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log!($handle, $crate::Severity::INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log!($handle, $crate::Severity::WARNING, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log!($handle, $crate::Severity::ERROR, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($handle:expr, $($arg:tt)+) => {
        $crate::log!($handle, $crate::Severity::CRITICAL, $($arg)+)
    };
}

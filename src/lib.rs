#![cfg_attr(docsrs, feature(doc_cfg))]

#![cfg_attr(
    feature = "singleton",
    doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))
)]
//! <br><br>
//!
//! ## You're probably looking for:
//! * [`Logger`](Logger)
//! * [`LogLevel`](LogLevel)
//! * the [`info!`] family of macros

pub mod prelude;
pub mod error;
pub(crate) mod levels;
pub(crate) mod sync;

pub use prelude::{
    Logger, LoggerError, LogLevel
};

#[cfg(feature = "singleton")]
pub use prelude::{
    logger, set_log_level, set_log_level_by_name, get_log_level, get_log_level_names, log_enabled
};

/// Shared expansion of the level macros.
///
/// `logger: <expr>,` targets a specific [`Logger`]; without it the
/// process-wide logger is used.
#[cfg(feature = "singleton")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($method:ident, logger: $logger:expr, $($arg:tt)+) => {
        $logger.$method(::core::format_args!($($arg)+))
    };
    ($method:ident, $($arg:tt)+) => {
        $crate::logger().$method(::core::format_args!($($arg)+))
    };
}

/// Without `singleton` there is no process-wide logger, so a target is required.
#[cfg(not(feature = "singleton"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($method:ident, logger: $logger:expr, $($arg:tt)+) => {
        $logger.$method(::core::format_args!($($arg)+))
    };
}

/// Logs at [`LogLevel::Trace`].
///
/// ```
/// let logger = level_logger::Logger::new(std::io::sink());
/// level_logger::trace!(logger: logger, "cache lookup for {}", "key");
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__log_at!(trace, $($arg)+) };
}

/// Logs at [`LogLevel::Debug`].
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log_at!(debug, $($arg)+) };
}

/// Logs at [`LogLevel::Info`].
///
/// ```
/// let logger = level_logger::Logger::new(std::io::sink());
/// level_logger::info!(logger: logger, "{} workers started", 4);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log_at!(info, $($arg)+) };
}

/// Logs at [`LogLevel::Warn`]. Lines are labelled `[Warning]`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__log_at!(warn, $($arg)+) };
}

/// Logs at [`LogLevel::Error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log_at!(error, $($arg)+) };
}

/// Logs at [`LogLevel::Panic`] and then panics with the formatted message.
///
/// ```should_panic
/// let logger = level_logger::Logger::new(std::io::sink());
/// level_logger::log_panic!(logger: logger, "boom {}", 7);
/// ```
#[macro_export]
macro_rules! log_panic {
    ($($arg:tt)+) => { $crate::__log_at!(panic, $($arg)+) };
}

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `leveled_log` is a zero-configuration, process-wide leveled logger. Every
//! function in this crate writes through one default [`Logger`] bound to
//! standard error, producing lines such as:
//!
//! ```text
//! 2006-01-02 15:04:05 NOTICE cache warmed in 412ms
//! ```
//!
//! The threshold starts at [`Severity::DEBUG`], so everything is logged until
//! [`set_level`] says otherwise.
//!
//! # Call conventions
//!
//! Each severity has a plain function that appends its arguments separated by
//! spaces, and an `f` function taking [`format_args!`] output. The `f` forms
//! also exist as macros ([`infof!`], [`errorf!`], ...) that accept format
//! strings directly.
//!
//! | Severity | Plain | Formatted | Existing error | Returns |
//! |---|---|---|---|---|
//! | DEBUG | [`debug`] | [`debugf`] | | `String` |
//! | INFO | [`info`] | [`infof`] | | `String` |
//! | NOTICE | [`notice`] | [`noticef`] | | `String` |
//! | WARNING | [`warning`] | [`warningf`] | | [`LogError`] |
//! | ERROR | [`error`] | [`errorf`] | [`errore`] | [`LogError`] / passthrough |
//! | CRITICAL | [`critical`] | [`criticalf`] | [`criticale`] | [`LogError`] / passthrough |
//! | FATAL | [`fatal`] | [`fatalf`] | [`fatale`] | never returns |
//!
//! Filtered entries write nothing and return an empty string; the
//! error-returning levels then return a [`LogError`] whose
//! [`is_suppressed`](LogError::is_suppressed) is `true`.
//!
//! # Examples
//!
//! ```no_run
//! use leveled_log::{Severity, infof};
//!
//! leveled_log::set_level(Severity::INFO);
//! leveled_log::info("listening on", &[&"0.0.0.0", &8080]);
//! infof!("{} workers started", 8);
//!
//! fn connect() -> Result<(), leveled_log::LogError> {
//!     Err(leveled_log::errorf(format_args!("upstream {} refused", "db-1")))
//! }
//! # let _ = connect();
//! ```
//!
//! Services that want an isolated logger (tests, multiple outputs in one
//! process) build their own [`Logger`] instead of using the default one.

use std::fmt::{self, Display};
use std::io;
use std::sync::LazyLock;

pub use logging::{
    Clock, ConfigError, DEFAULT_FATAL_EXIT_CODE, Entry, FixedClock, LocalClock, LogError, Logger,
    LoggerConfig, ParseSeverityError, ParseSeverityErrorKind, Severity, Threshold,
};
#[cfg(feature = "tracing")]
pub use logging::{SeverityLayer, init_tracing, try_init_tracing};
pub use logging_sink::LogSink;

mod macros;

static DEFAULT_LOGGER: LazyLock<Logger<io::Stderr>> = LazyLock::new(Logger::stderr);

/// Returns the process-wide logger every free function writes through.
pub fn logger() -> &'static Logger<io::Stderr> {
    &DEFAULT_LOGGER
}

/// Replaces the process-wide threshold.
pub fn set_level(level: Severity) {
    logger().set_level(level);
}

/// Returns the process-wide threshold.
pub fn get_level() -> Severity {
    logger().level()
}

/// Logs at DEBUG, appending `args`.
pub fn debug(message: &str, args: &[&dyn Display]) -> String {
    logger().debug(message, args)
}

/// Logs at DEBUG from `format_args!` output.
pub fn debugf(args: fmt::Arguments<'_>) -> String {
    logger().debugf(args)
}

/// Logs at INFO, appending `args`.
pub fn info(message: &str, args: &[&dyn Display]) -> String {
    logger().info(message, args)
}

/// Logs at INFO from `format_args!` output.
pub fn infof(args: fmt::Arguments<'_>) -> String {
    logger().infof(args)
}

/// Logs at NOTICE, appending `args`.
pub fn notice(message: &str, args: &[&dyn Display]) -> String {
    logger().notice(message, args)
}

/// Logs at NOTICE from `format_args!` output.
pub fn noticef(args: fmt::Arguments<'_>) -> String {
    logger().noticef(args)
}

/// Logs at WARNING, appending `args`, wrapped in a [`LogError`].
pub fn warning(message: &str, args: &[&dyn Display]) -> LogError {
    logger().warning(message, args)
}

/// Logs at WARNING from `format_args!` output, wrapped in a [`LogError`].
pub fn warningf(args: fmt::Arguments<'_>) -> LogError {
    logger().warningf(args)
}

/// Logs at ERROR, appending `args`, wrapped in a [`LogError`].
pub fn error(message: &str, args: &[&dyn Display]) -> LogError {
    logger().error(message, args)
}

/// Logs at ERROR from `format_args!` output, wrapped in a [`LogError`].
pub fn errorf(args: fmt::Arguments<'_>) -> LogError {
    logger().errorf(args)
}

/// Logs an existing error at ERROR and returns it unchanged.
pub fn errore<E: Display>(err: Option<E>) -> Option<E> {
    logger().errore(err)
}

/// Logs at CRITICAL, appending `args`, wrapped in a [`LogError`].
pub fn critical(message: &str, args: &[&dyn Display]) -> LogError {
    logger().critical(message, args)
}

/// Logs at CRITICAL from `format_args!` output, wrapped in a [`LogError`].
pub fn criticalf(args: fmt::Arguments<'_>) -> LogError {
    logger().criticalf(args)
}

/// Logs an existing error at CRITICAL and returns it unchanged.
pub fn criticale<E: Display>(err: Option<E>) -> Option<E> {
    logger().criticale(err)
}

/// Logs at FATAL, appending `args`, then exits with status 1.
pub fn fatal(message: &str, args: &[&dyn Display]) -> ! {
    logger().fatal(message, args)
}

/// Logs at FATAL from `format_args!` output, then exits with status 1.
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    logger().fatalf(args)
}

/// Logs an existing error at FATAL, then exits with status 1.
pub fn fatale<E: Display>(err: Option<E>) -> ! {
    logger().fatale(err)
}

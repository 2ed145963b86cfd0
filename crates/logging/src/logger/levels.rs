//! Per-severity entry points.
//!
//! Every level has a plain form taking a message plus `Display` arguments to
//! append, and an `f` form taking [`format_args!`] output.

use std::fmt::{self, Display};
use std::io::Write;

use super::Logger;
use crate::clock::Clock;
use crate::error::LogError;
use crate::severity::Severity;

impl<W, C> Logger<W, C>
where
    W: Write,
    C: Clock,
{
    /// Logs at DEBUG, appending `args`. Returns the line, or `""` if filtered.
    pub fn debug(&self, message: &str, args: &[&dyn Display]) -> String {
        self.emit_joined(Severity::DEBUG, message, args)
    }

    /// Logs at DEBUG from `format_args!` output.
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> String {
        self.emit(Severity::DEBUG, args)
    }

    /// Logs at INFO, appending `args`. Returns the line, or `""` if filtered.
    pub fn info(&self, message: &str, args: &[&dyn Display]) -> String {
        self.emit_joined(Severity::INFO, message, args)
    }

    /// Logs at INFO from `format_args!` output.
    pub fn infof(&self, args: fmt::Arguments<'_>) -> String {
        self.emit(Severity::INFO, args)
    }

    /// Logs at NOTICE, appending `args`. Returns the line, or `""` if filtered.
    pub fn notice(&self, message: &str, args: &[&dyn Display]) -> String {
        self.emit_joined(Severity::NOTICE, message, args)
    }

    /// Logs at NOTICE from `format_args!` output.
    pub fn noticef(&self, args: fmt::Arguments<'_>) -> String {
        self.emit(Severity::NOTICE, args)
    }

    /// Logs at WARNING, appending `args`, and wraps the line in a [`LogError`].
    ///
    /// The error is returned even when the entry was filtered out; see
    /// [`LogError::is_suppressed`].
    pub fn warning(&self, message: &str, args: &[&dyn Display]) -> LogError {
        LogError::new(
            Severity::WARNING,
            self.emit_joined(Severity::WARNING, message, args),
        )
    }

    /// Logs at WARNING from `format_args!` output, wrapped in a [`LogError`].
    pub fn warningf(&self, args: fmt::Arguments<'_>) -> LogError {
        LogError::new(Severity::WARNING, self.emit(Severity::WARNING, args))
    }

    /// Logs at ERROR, appending `args`, and wraps the line in a [`LogError`].
    pub fn error(&self, message: &str, args: &[&dyn Display]) -> LogError {
        LogError::new(
            Severity::ERROR,
            self.emit_joined(Severity::ERROR, message, args),
        )
    }

    /// Logs at ERROR from `format_args!` output, wrapped in a [`LogError`].
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> LogError {
        LogError::new(Severity::ERROR, self.emit(Severity::ERROR, args))
    }

    /// Logs an existing error at ERROR and hands it back untouched.
    ///
    /// `None` logs nothing and returns `None`. The error is rendered with the
    /// alternate `{:#}` form so error types that print their cause chain in
    /// that mode (such as `anyhow::Error`) log it in full.
    ///
    /// ```
    /// use logging::Logger;
    /// use std::io;
    ///
    /// let logger = Logger::new(Vec::new());
    /// let err = logger.errore(Some(io::Error::other("disk full")));
    /// assert_eq!(err.map(|e| e.to_string()), Some("disk full".to_owned()));
    /// assert!(logger.errore(None::<io::Error>).is_none());
    /// ```
    pub fn errore<E>(&self, err: Option<E>) -> Option<E>
    where
        E: Display,
    {
        self.pass_error(Severity::ERROR, err)
    }

    /// Logs at CRITICAL, appending `args`, and wraps the line in a [`LogError`].
    pub fn critical(&self, message: &str, args: &[&dyn Display]) -> LogError {
        LogError::new(
            Severity::CRITICAL,
            self.emit_joined(Severity::CRITICAL, message, args),
        )
    }

    /// Logs at CRITICAL from `format_args!` output, wrapped in a [`LogError`].
    pub fn criticalf(&self, args: fmt::Arguments<'_>) -> LogError {
        LogError::new(Severity::CRITICAL, self.emit(Severity::CRITICAL, args))
    }

    /// Logs an existing error at CRITICAL and hands it back untouched.
    pub fn criticale<E>(&self, err: Option<E>) -> Option<E>
    where
        E: Display,
    {
        self.pass_error(Severity::CRITICAL, err)
    }

    /// Logs at FATAL, appending `args`, then exits the process.
    pub fn fatal(&self, message: &str, args: &[&dyn Display]) -> ! {
        self.emit_joined(Severity::FATAL, message, args);
        self.terminate()
    }

    /// Logs at FATAL from `format_args!` output, then exits the process.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Severity::FATAL, args);
        self.terminate()
    }

    /// Logs an existing error at FATAL, then exits the process.
    ///
    /// `None` logs nothing but still exits.
    pub fn fatale<E>(&self, err: Option<E>) -> !
    where
        E: Display,
    {
        self.pass_error(Severity::FATAL, err);
        self.terminate()
    }
}

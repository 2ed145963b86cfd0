//! crates/logging/src/logger.rs
//! The logger instance: threshold, clock and sink bound together.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::process;

use logging_sink::LogSink;

use super::clock::{Clock, LocalClock};
use super::config::{ConfigError, DEFAULT_FATAL_EXIT_CODE, LoggerConfig};
use super::entry::{Entry, join_message};
use super::severity::Severity;
use super::threshold::Threshold;

mod levels;

/// Leveled logger writing one line per entry to `W`.
///
/// A logger is shared by reference (`&self` everywhere), so one instance can
/// serve every thread of a process. The threshold may be changed at any time
/// with [`set_level`](Self::set_level).
pub struct Logger<W, C = LocalClock> {
    threshold: Threshold,
    clock: C,
    fatal_exit_code: i32,
    sink: LogSink<W>,
}

impl<W> Logger<W> {
    /// Creates a logger that logs everything, stamped with local time.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_clock(writer, LocalClock::new())
    }

    /// Creates a logger from validated settings.
    pub fn from_config(config: &LoggerConfig, writer: W) -> Result<Self, ConfigError> {
        Self::from_config_with_clock(config, writer, LocalClock::new())
    }
}

impl Logger<io::Stderr> {
    /// Creates a logger bound to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W, C> Logger<W, C>
where
    C: Clock,
{
    /// Creates a logger that logs everything, stamped by `clock`.
    #[must_use]
    pub fn with_clock(writer: W, clock: C) -> Self {
        Self {
            threshold: Threshold::default(),
            clock,
            fatal_exit_code: DEFAULT_FATAL_EXIT_CODE,
            sink: LogSink::new(writer),
        }
    }

    /// Creates a logger from validated settings, stamped by `clock`.
    pub fn from_config_with_clock(
        config: &LoggerConfig,
        writer: W,
        clock: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let logger = Self {
            threshold: Threshold::new(config.threshold),
            clock,
            fatal_exit_code: config.fatal_exit_code,
            sink: LogSink::new(writer),
        };
        Ok(logger)
    }

    /// Replaces the threshold. No validation is performed.
    pub fn set_level(&self, level: Severity) {
        self.threshold.set(level);
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.threshold.get()
    }

    /// Reports whether an entry at `severity` would currently be written.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold.permits(severity)
    }

    /// Borrows the threshold cell.
    #[must_use]
    pub const fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Exit status used by the FATAL family.
    #[must_use]
    pub const fn fatal_exit_code(&self) -> i32 {
        self.fatal_exit_code
    }

    /// Borrows the output sink.
    #[must_use]
    pub const fn sink(&self) -> &LogSink<W> {
        &self.sink
    }

    /// Consumes the logger and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.sink.into_inner()
    }
}

impl<W, C> Logger<W, C>
where
    W: Write,
    C: Clock,
{
    /// Writes an entry whose message is produced by `args`.
    ///
    /// Returns the rendered line (without newline) when the entry passes the
    /// threshold, and an empty string, with no output, when it does not.
    /// Output is best-effort: write failures are ignored.
    pub fn emit(&self, severity: Severity, args: fmt::Arguments<'_>) -> String {
        if !self.enabled(severity) {
            return String::new();
        }
        let message = args
            .as_str()
            .map_or_else(|| fmt::format(args), str::to_owned);
        self.write_entry(severity, message)
    }

    /// Writes an entry whose message is `message` followed by each of `args`,
    /// separated by single spaces. Placeholders in `message` are not
    /// interpreted.
    pub fn emit_joined(&self, severity: Severity, message: &str, args: &[&dyn Display]) -> String {
        if !self.enabled(severity) {
            return String::new();
        }
        self.write_entry(severity, join_message(message, args))
    }

    fn write_entry(&self, severity: Severity, message: String) -> String {
        let line = Entry::new(severity, self.clock.now(), message).render();
        let _ = self.sink.write_line(&line);
        line
    }

    fn pass_error<E>(&self, severity: Severity, err: Option<E>) -> Option<E>
    where
        E: Display,
    {
        let err = err?;
        self.emit_joined(severity, &format!("{err:#}"), &[]);
        Some(err)
    }

    fn terminate(&self) -> ! {
        let _ = self.sink.flush();
        process::exit(self.fatal_exit_code)
    }
}

impl<W, C> fmt::Debug for Logger<W, C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("clock", &self.clock)
            .field("fatal_exit_code", &self.fatal_exit_code)
            .field("sink", &self.sink)
            .finish()
    }
}

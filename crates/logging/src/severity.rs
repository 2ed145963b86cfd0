//! crates/logging/src/severity.rs
//! Ordered severity levels, their labels and textual parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
mod serde_impl;

/// Severity of a log entry.
///
/// Seven named severities are defined, ordered from most to least severe:
/// [`FATAL`](Self::FATAL), [`CRITICAL`](Self::CRITICAL), [`ERROR`](Self::ERROR),
/// [`WARNING`](Self::WARNING), [`NOTICE`](Self::NOTICE), [`INFO`](Self::INFO)
/// and [`DEBUG`](Self::DEBUG). A lower ordinal means a more severe entry, so
/// `Severity::FATAL < Severity::DEBUG`.
///
/// The type wraps the raw ordinal rather than being a closed `enum`: values
/// outside the seven named ordinals can be built with
/// [`from_raw`](Self::from_raw), still compare numerically and act as
/// thresholds, and render as `"unknown"`.
///
/// # Examples
///
/// ```
/// use logging::Severity;
///
/// assert!(Severity::ERROR < Severity::WARNING);
/// assert_eq!(Severity::NOTICE.to_string(), "NOTICE");
/// assert_eq!(Severity::from_raw(42).to_string(), "unknown");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(i32);

impl Severity {
    /// Entry after which the process terminates.
    pub const FATAL: Self = Self(0);
    /// Critical condition.
    pub const CRITICAL: Self = Self(1);
    /// Error condition.
    pub const ERROR: Self = Self(2);
    /// Warning condition.
    pub const WARNING: Self = Self(3);
    /// Normal but significant condition.
    pub const NOTICE: Self = Self(4);
    /// Informational message.
    pub const INFO: Self = Self(5);
    /// Debug-level message; the least severe named level.
    pub const DEBUG: Self = Self(6);

    /// The seven named severities in ordinal order.
    pub const ALL: [Self; 7] = [
        Self::FATAL,
        Self::CRITICAL,
        Self::ERROR,
        Self::WARNING,
        Self::NOTICE,
        Self::INFO,
        Self::DEBUG,
    ];

    /// Builds a severity from its raw ordinal. Any value is accepted.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw ordinal.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Reports whether the ordinal is one of the seven named severities.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 >= Self::FATAL.0 && self.0 <= Self::DEBUG.0
    }

    /// Returns the canonical uppercase label, or `"unknown"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "FATAL",
            1 => "CRITICAL",
            2 => "ERROR",
            3 => "WARNING",
            4 => "NOTICE",
            5 => "INFO",
            6 => "DEBUG",
            _ => "unknown",
        }
    }

    /// Reports whether an entry at `entry` passes when `self` is the threshold.
    ///
    /// An entry passes when it is as severe as or more severe than the
    /// threshold, i.e. when its ordinal is less than or equal to the
    /// threshold's.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::WARNING.permits(Severity::ERROR));
    /// assert!(Severity::WARNING.permits(Severity::WARNING));
    /// assert!(!Severity::WARNING.permits(Severity::INFO));
    /// ```
    #[must_use]
    pub const fn permits(self, entry: Self) -> bool {
        entry.0 <= self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::DEBUG
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<i32> for Severity {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.as_raw()
    }
}

/// Classification of [`ParseSeverityError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseSeverityErrorKind {
    /// The input was empty after trimming ASCII whitespace.
    Empty,
    /// The input was neither a known label nor an integer.
    UnknownLabel,
}

/// Error returned when parsing a [`Severity`] from text fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub struct ParseSeverityError {
    kind: ParseSeverityErrorKind,
    input: String,
}

impl ParseSeverityError {
    fn new(kind: ParseSeverityErrorKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }

    /// Returns why parsing failed.
    #[must_use]
    pub const fn kind(&self) -> ParseSeverityErrorKind {
        self.kind
    }

    /// Returns the rejected input, as given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseSeverityErrorKind::Empty => f.write_str("severity string is empty"),
            ParseSeverityErrorKind::UnknownLabel => {
                write!(f, "unrecognised severity '{}'", self.input.trim())
            }
        }
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a label (case-insensitive, `WARN` and `CRIT` accepted as
    /// aliases) or a decimal ordinal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_ascii();
        if trimmed.is_empty() {
            return Err(ParseSeverityError::new(ParseSeverityErrorKind::Empty, s));
        }

        let named = match trimmed.to_ascii_uppercase().as_str() {
            "FATAL" => Some(Self::FATAL),
            "CRITICAL" | "CRIT" => Some(Self::CRITICAL),
            "ERROR" => Some(Self::ERROR),
            "WARNING" | "WARN" => Some(Self::WARNING),
            "NOTICE" => Some(Self::NOTICE),
            "INFO" => Some(Self::INFO),
            "DEBUG" => Some(Self::DEBUG),
            _ => None,
        };
        if let Some(severity) = named {
            return Ok(severity);
        }

        trimmed
            .parse::<i32>()
            .map(Self::from_raw)
            .map_err(|_| ParseSeverityError::new(ParseSeverityErrorKind::UnknownLabel, s))
    }
}

#[cfg(test)]
mod tests;

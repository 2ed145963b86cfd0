//! crates/logging/src/entry.rs
//! Rendering of a single log entry into its one-line textual form.

use std::fmt::{self, Display, Write as _};

use time::OffsetDateTime;
use time::macros::format_description;

use super::severity::Severity;

/// Rendered when a timestamp cannot be formatted.
pub const FALLBACK_TIMESTAMP: &str = "0000-00-00 00:00:00";

/// A log entry as it exists between filtering and output.
///
/// Entries are never stored; they are rendered to a line and dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    severity: Severity,
    timestamp: OffsetDateTime,
    message: String,
}

impl Entry {
    /// Creates an entry stamped with `timestamp`.
    #[must_use]
    pub const fn new(severity: Severity, timestamp: OffsetDateTime, message: String) -> Self {
        Self {
            severity,
            timestamp,
            message,
        }
    }

    /// Severity of the entry.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Instant captured at emission.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Message text, without timestamp or label.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders `<timestamp> <LABEL> <message>` without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_timestamp(self.timestamp),
            self.severity,
            self.message
        )
    }
}

/// Formats `instant` as `YYYY-MM-DD HH:MM:SS` in its own offset: 24-hour
/// clock, no zone suffix, no fractional seconds.
#[must_use]
pub fn format_timestamp(instant: OffsetDateTime) -> String {
    instant
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}

/// Builds a message by appending each argument, preceded by a single space.
///
/// No placeholders in `message` are interpreted; `%d` or `{}` appear verbatim.
///
/// ```
/// use logging::join_message;
///
/// assert_eq!(join_message("copied", &[&3, &"files"]), "copied 3 files");
/// assert_eq!(join_message("100%", &[]), "100%");
/// ```
#[must_use]
pub fn join_message(message: &str, args: &[&dyn Display]) -> String {
    let mut joined = String::from(message);
    for arg in args {
        let _ = write!(joined, " {arg}");
    }
    joined
}

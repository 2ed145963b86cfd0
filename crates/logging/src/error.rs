//! crates/logging/src/error.rs
//! Error value returned by the error-wrapping severities.

use thiserror::Error;

use super::severity::Severity;

/// Error wrapping the line rendered by a WARNING, ERROR or CRITICAL call.
///
/// Its [`Display`](std::fmt::Display) output is exactly the rendered line,
/// timestamp and label included.
///
/// A `LogError` is produced even when the entry was filtered out by the
/// threshold. In that case the wrapped text is empty and
/// [`is_suppressed`](Self::is_suppressed) returns `true`; callers that need to
/// tell "logged" from "filtered" must check it rather than rely on receiving
/// an error at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{text}")]
pub struct LogError {
    severity: Severity,
    text: String,
}

impl LogError {
    /// Wraps `text` rendered at `severity`.
    #[must_use]
    pub const fn new(severity: Severity, text: String) -> Self {
        Self { severity, text }
    }

    /// Severity the entry was logged at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// The rendered line, or `""` when the entry was suppressed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the error and returns the rendered line.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Reports whether the entry was filtered out, leaving the text empty.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_wrapped_text() {
        let err = LogError::new(
            Severity::ERROR,
            "2024-01-01 00:00:00 ERROR boom".to_owned(),
        );
        assert_eq!(err.to_string(), "2024-01-01 00:00:00 ERROR boom");
        assert_eq!(err.severity(), Severity::ERROR);
        assert!(!err.is_suppressed());
    }

    #[test]
    fn empty_text_marks_suppression() {
        let err = LogError::new(Severity::WARNING, String::new());
        assert!(err.is_suppressed());
        assert_eq!(err.to_string(), "");
        assert_eq!(err.into_text(), "");
    }

    #[test]
    fn converts_into_boxed_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            LogError::new(Severity::CRITICAL, "bad".to_owned()).into();
        assert_eq!(boxed.to_string(), "bad");
        assert!(boxed.source().is_none());
    }
}

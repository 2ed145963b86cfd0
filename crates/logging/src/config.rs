//! crates/logging/src/config.rs
//! Logger configuration.

use thiserror::Error;

use super::severity::{ParseSeverityError, Severity};

/// Exit status used by the FATAL family unless configured otherwise.
pub const DEFAULT_FATAL_EXIT_CODE: i32 = 1;

/// Settings a [`Logger`](crate::Logger) is built from.
///
/// With the `serde` feature the struct can be embedded in a host service's
/// own configuration; missing fields take their defaults.
///
/// ```
/// use logging::{LoggerConfig, Severity};
///
/// let config = LoggerConfig::default()
///     .with_threshold(Severity::WARNING)
///     .with_fatal_exit_code(70);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Least severe level that is still emitted.
    pub threshold: Severity,
    /// Process exit status after a FATAL entry. Must be non-zero.
    pub fatal_exit_code: i32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::DEBUG,
            fatal_exit_code: DEFAULT_FATAL_EXIT_CODE,
        }
    }
}

impl LoggerConfig {
    /// Replaces the threshold.
    pub const fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replaces the FATAL exit status.
    pub const fn with_fatal_exit_code(mut self, code: i32) -> Self {
        self.fatal_exit_code = code;
        self
    }

    /// Parses `text` as a severity and uses it as the threshold.
    pub fn parse_threshold(mut self, text: &str) -> Result<Self, ConfigError> {
        self.threshold = text.parse().map_err(ConfigError::InvalidThreshold)?;
        Ok(self)
    }

    /// Checks the settings for values the logger cannot honour.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.fatal_exit_code == 0 {
            return Err(ConfigError::ZeroExitCode);
        }
        Ok(())
    }
}

/// Errors reported while building a logger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The threshold text was not a severity.
    #[error("invalid threshold: {0}")]
    InvalidThreshold(#[source] ParseSeverityError),
    /// A FATAL entry must terminate the process with a failure status.
    #[error("fatal exit code must be non-zero")]
    ZeroExitCode,
}

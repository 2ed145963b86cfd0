#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` implements a leveled logger that writes one line per entry to
//! standard error:
//!
//! ```text
//! 2006-01-02 15:04:05 WARNING disk usage at 91%
//! ```
//!
//! # Design
//!
//! A [`Logger`] owns its [`Threshold`], a [`Clock`] and a
//! [`LogSink`](logging_sink::LogSink). Each of the seven [`Severity`] levels
//! offers two call conventions:
//!
//! - plain methods (`info`, `warning`, ...) append each argument's `Display`
//!   text to the message, separated by single spaces;
//! - `f` methods (`infof`, `warningf`, ...) take [`format_args!`] output.
//!
//! DEBUG, INFO and NOTICE return the rendered line. WARNING, ERROR and
//! CRITICAL return it wrapped in a [`LogError`]. ERROR, CRITICAL and FATAL
//! also accept an existing error (`errore`, `criticale`, `fatale`) and pass it
//! through unchanged. The FATAL family never returns: the process exits with
//! the configured non-zero status after the entry is written.
//!
//! # Invariants
//!
//! - An entry is written iff its ordinal is `<=` the threshold's ordinal.
//! - A filtered entry performs no I/O and yields an empty string.
//! - Each written entry is exactly one line; concurrent writers never
//!   interleave.
//!
//! # Examples
//!
//! ```
//! use logging::{FixedClock, Logger, Severity};
//! use time::macros::datetime;
//!
//! let logger = Logger::with_clock(Vec::new(), FixedClock::new(datetime!(2024-05-01 09:30:00 UTC)));
//! logger.set_level(Severity::INFO);
//!
//! assert_eq!(logger.info("listening on", &[&8080]), "2024-05-01 09:30:00 INFO listening on 8080");
//! assert_eq!(logger.debugf(format_args!("{} sockets", 3)), "");
//!
//! let err = logger.errorf(format_args!("bind failed: {}", "in use"));
//! assert_eq!(err.to_string(), "2024-05-01 09:30:00 ERROR bind failed: in use");
//! ```

mod clock;
mod config;
mod entry;
mod error;
mod logger;
mod severity;
mod threshold;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::{ConfigError, DEFAULT_FATAL_EXIT_CODE, LoggerConfig};
pub use entry::{Entry, FALLBACK_TIMESTAMP, format_timestamp, join_message};
pub use error::LogError;
pub use logger::Logger;
pub use severity::{ParseSeverityError, ParseSeverityErrorKind, Severity};
pub use threshold::Threshold;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{SeverityLayer, init_tracing, try_init_tracing};

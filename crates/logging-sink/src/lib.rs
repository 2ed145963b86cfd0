#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output stage of the leveled logger: a
//! [`LogSink`] that owns a writer (standard error by default) and emits one
//! rendered entry per call as a complete, newline-terminated line.
//!
//! # Design
//!
//! The writer lives behind a [`Mutex`](std::sync::Mutex). Each line and its
//! terminator are assembled into a single buffer and handed to the writer in
//! one `write_all` call while the lock is held, so entries emitted
//! concurrently from many threads never interleave partial lines.
//!
//! # Invariants
//!
//! - Every successful [`LogSink::write_line`] appends exactly one `\n`.
//! - A panic while the lock is held does not disable the sink; the poisoned
//!   lock is recovered on the next call.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer. The logger treats output as best-effort and discards
//! them.
//!
//! # Examples
//!
//! ```
//! use logging_sink::LogSink;
//!
//! let sink = LogSink::new(Vec::new());
//! sink.write_line("2024-05-01 10:00:00 INFO ready")?;
//! sink.write_line("2024-05-01 10:00:01 DEBUG idle")?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 2);
//! assert!(output.ends_with('\n'));
//! # Ok::<(), std::io::Error>(())
//! ```

mod sink;

pub use sink::LogSink;

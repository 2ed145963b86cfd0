//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the leveled logger.
//!
//! [`SeverityLayer`] is a tracing-subscriber layer that turns every tracing
//! event into a logger entry, so code instrumented with the standard tracing
//! macros produces the same `<timestamp> <LABEL> <message>` lines as direct
//! logger calls. The logger's own threshold decides what is written.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Logger, Severity, init_tracing};
//!
//! let logger = Arc::new(Logger::stderr());
//! logger.set_level(Severity::INFO);
//! init_tracing(Arc::clone(&logger));
//!
//! tracing::warn!("cache miss ratio at {}%", 40);
//! ```

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use super::clock::{Clock, LocalClock};
use super::logger::Logger;
use super::severity::Severity;

/// A tracing layer that writes events through a shared [`Logger`].
pub struct SeverityLayer<W, C = LocalClock> {
    logger: Arc<Logger<W, C>>,
}

impl<W, C> SeverityLayer<W, C> {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W, C>>) -> Self {
        Self { logger }
    }

    /// Borrows the logger events are written through.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger<W, C>> {
        &self.logger
    }

    /// Map a tracing level to a severity. TRACE has no counterpart and is
    /// folded into DEBUG.
    const fn severity_for(level: Level) -> Severity {
        match level {
            Level::ERROR => Severity::ERROR,
            Level::WARN => Severity::WARNING,
            Level::INFO => Severity::INFO,
            Level::DEBUG | Level::TRACE => Severity::DEBUG,
        }
    }
}

impl<S, W, C> Layer<S> for SeverityLayer<W, C>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
    C: Clock + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(*event.metadata().level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.logger.emit_joined(severity, &message, &[]);
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Install a global subscriber that routes tracing events through `logger`.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed; use
/// [`try_init_tracing`] to handle that case.
pub fn init_tracing<W, C>(logger: Arc<Logger<W, C>>)
where
    W: Write + Send + 'static,
    C: Clock + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(SeverityLayer::new(logger))
        .init();
}

/// Like [`init_tracing`], but reports an already-installed subscriber as an
/// error instead of panicking.
pub fn try_init_tracing<W, C>(logger: Arc<Logger<W, C>>) -> Result<(), TryInitError>
where
    W: Write + Send + 'static,
    C: Clock + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(SeverityLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use test_support::SharedBuffer;
    use time::macros::datetime;
    use tracing_subscriber::layer::SubscriberExt;

    type TestLayer = SeverityLayer<SharedBuffer, FixedClock>;

    fn layer_with_buffer() -> (TestLayer, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = Logger::with_clock(
            buffer.clone(),
            FixedClock::new(datetime!(2024-01-15 08:00:00 UTC)),
        );
        (SeverityLayer::new(Arc::new(logger)), buffer)
    }

    #[test]
    fn test_severity_for_levels() {
        assert_eq!(TestLayer::severity_for(Level::ERROR), Severity::ERROR);
        assert_eq!(TestLayer::severity_for(Level::WARN), Severity::WARNING);
        assert_eq!(TestLayer::severity_for(Level::INFO), Severity::INFO);
        assert_eq!(TestLayer::severity_for(Level::DEBUG), Severity::DEBUG);
        assert_eq!(TestLayer::severity_for(Level::TRACE), Severity::DEBUG);
    }

    #[test]
    fn test_events_are_written_as_lines() {
        let (layer, buffer) = layer_with_buffer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("disk usage at {}%", 91);
            tracing::info!(target: "service::http", "listening");
        });

        assert_eq!(
            buffer.lines(),
            vec![
                "2024-01-15 08:00:00 WARNING disk usage at 91%",
                "2024-01-15 08:00:00 INFO listening",
            ]
        );
    }

    #[test]
    fn test_logger_threshold_filters_events() {
        let (layer, buffer) = layer_with_buffer();
        layer.logger().set_level(Severity::WARNING);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("noise");
            tracing::trace!("more noise");
            tracing::info!("still noise");
            tracing::error!("kept");
        });

        assert_eq!(buffer.lines(), vec!["2024-01-15 08:00:00 ERROR kept"]);
    }

    #[test]
    fn test_events_without_message_are_skipped() {
        let (layer, buffer) = layer_with_buffer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(retries = 3);
        });

        assert!(buffer.is_empty());
    }
}

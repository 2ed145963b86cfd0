//! crates/logging/src/clock.rs
//! Wall-clock sources used to timestamp entries.

use time::{OffsetDateTime, UtcOffset};

/// Source of the instant stamped on each entry.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Local wall-clock time.
///
/// The local UTC offset is captured when the clock is built. On each call the
/// clock first asks the platform for the local time, and falls back to the
/// captured offset when the platform declines to answer (the `time` crate
/// refuses to query the offset from a multi-threaded Unix process).
#[derive(Clone, Copy, Debug)]
pub struct LocalClock {
    fallback_offset: UtcOffset,
}

impl LocalClock {
    /// Creates a clock, capturing the current local offset (UTC if unknown).
    #[must_use]
    pub fn new() -> Self {
        Self {
            fallback_offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }

    /// Returns the offset used when the platform cannot report local time.
    #[must_use]
    pub const fn fallback_offset(&self) -> UtcOffset {
        self.fallback_offset
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for LocalClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc().to_offset(self.fallback_offset))
    }
}

/// Clock frozen at a single instant, for reproducible output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: OffsetDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: OffsetDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn fixed_clock_never_advances() {
        let clock = FixedClock::new(datetime!(2024-02-29 23:59:59 UTC));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), datetime!(2024-02-29 23:59:59 UTC));
    }

    #[test]
    fn local_clock_reports_current_time() {
        let clock = LocalClock::new();
        let before = OffsetDateTime::now_utc();
        let now = clock.now();
        let after = OffsetDateTime::now_utc();
        assert!(now >= before && now <= after);
    }

    #[test]
    fn local_clock_stamps_local_offset() {
        let clock = LocalClock::new();
        let expected = UtcOffset::current_local_offset().unwrap_or(clock.fallback_offset());
        assert_eq!(clock.now().offset(), expected);
    }
}

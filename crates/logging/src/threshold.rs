//! crates/logging/src/threshold.rs
//! Shared, lock-free storage for the active severity threshold.

use std::sync::atomic::{AtomicI32, Ordering};

use super::severity::Severity;

/// Mutable severity threshold shared by every caller of a logger.
///
/// Reads and writes are atomic, so the threshold may be changed from one
/// thread while others are logging. Entries are emitted when they are as
/// severe as or more severe than the stored value.
#[derive(Debug)]
pub struct Threshold {
    raw: AtomicI32,
}

impl Threshold {
    /// Creates a threshold holding `level`.
    #[must_use]
    pub const fn new(level: Severity) -> Self {
        Self {
            raw: AtomicI32::new(level.as_raw()),
        }
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn get(&self) -> Severity {
        Severity::from_raw(self.raw.load(Ordering::Relaxed))
    }

    /// Replaces the threshold. Any value is accepted, including ordinals
    /// outside the named severities.
    pub fn set(&self, level: Severity) {
        self.raw.store(level.as_raw(), Ordering::Relaxed);
    }

    /// Reports whether an entry at `entry` passes the current threshold.
    #[must_use]
    pub fn permits(&self, entry: Severity) -> bool {
        self.get().permits(entry)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Severity::DEBUG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn default_threshold_is_debug() {
        let threshold = Threshold::default();
        assert_eq!(threshold.get(), Severity::DEBUG);
        assert!(Severity::ALL.iter().all(|s| threshold.permits(*s)));
    }

    #[test]
    fn set_then_get_returns_same_level() {
        let threshold = Threshold::default();
        for level in Severity::ALL {
            threshold.set(level);
            assert_eq!(threshold.get(), level);
        }
    }

    #[test]
    fn accepts_out_of_range_values() {
        let threshold = Threshold::new(Severity::INFO);
        threshold.set(Severity::from_raw(77));
        assert_eq!(threshold.get().as_raw(), 77);
        assert!(threshold.permits(Severity::DEBUG));

        threshold.set(Severity::from_raw(-5));
        assert!(!threshold.permits(Severity::FATAL));
    }

    #[test]
    fn fatal_threshold_only_permits_fatal() {
        let threshold = Threshold::new(Severity::FATAL);
        assert!(threshold.permits(Severity::FATAL));
        assert!(!threshold.permits(Severity::CRITICAL));
        assert!(!threshold.permits(Severity::DEBUG));
    }

    #[test]
    fn updates_are_visible_across_threads() {
        let threshold = Arc::new(Threshold::default());
        let writer = Arc::clone(&threshold);
        thread::spawn(move || writer.set(Severity::ERROR))
            .join()
            .expect("setter thread");
        assert_eq!(threshold.get(), Severity::ERROR);
    }
}

//! Time management for scan scheduling
//!
//! The scan gate only ever compares timestamps, so any millisecond clock
//! works:
//! - System clock (wall time, when `std` is available)
//! - Mock clock (deterministic tests, replay of recorded surveys)
//!
//! Callers may also skip the clock entirely and pass `now` explicitly to
//! [`ScanGate::admit`](crate::scan::ScanGate::admit).

use core::cell::Cell;

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Source of time for the system
///
/// `now()` must be cheap; the gate reads it once per request.
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Controllable time source for tests
///
/// Uses interior mutability so a shared reference can be handed to the code
/// under test while the test keeps advancing it.
#[derive(Debug, Clone, Default)]
pub struct MockTimeSource {
    timestamp: Cell<Timestamp>,
}

impl MockTimeSource {
    /// Create a clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp: Cell::new(timestamp),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `ms` milliseconds
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(ms));
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Milliseconds from `earlier` to `later`, zero if the clock went backwards
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_advances() {
        let time = MockTimeSource::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10);
        assert_eq!(time.now(), 10);
    }

    #[test]
    fn elapsed_saturates_backwards() {
        assert_eq!(elapsed_ms(1000, 4000), 3000);
        assert_eq!(elapsed_ms(4000, 1000), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_wall_time() {
        let clock = SystemClock;
        assert!(clock.is_wall_clock());
        assert!(clock.now() > 1_600_000_000_000);
    }
}

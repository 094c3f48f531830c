//! Tokio-backed clock
//!
//! Reads milliseconds elapsed on the tokio clock since construction, so a
//! runtime with paused time (`tokio::time::pause`) drives the session
//! deterministically.

use tokio::time::Instant;
use wavemap_core::{TimeSource, Timestamp};

/// Monotonic clock on tokio's timer
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
    offset_ms: Timestamp,
}

impl TokioClock {
    /// Clock reading zero now
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Clock reading `offset_ms` now
    pub fn starting_at(offset_ms: Timestamp) -> Self {
        Self {
            origin: Instant::now(),
            offset_ms,
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for TokioClock {
    fn now(&self) -> Timestamp {
        self.offset_ms
            .saturating_add(self.origin.elapsed().as_millis() as Timestamp)
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn follows_paused_time() {
        let clock = TokioClock::starting_at(500);
        assert_eq!(clock.now(), 500);

        tokio::time::sleep(Duration::from_millis(1_250)).await;
        assert_eq!(clock.now(), 1_750);
        assert!(!clock.is_wall_clock());
    }
}

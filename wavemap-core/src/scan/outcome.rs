//! Scan outcome values
//!
//! Every scan request ends in exactly one terminal [`ScanOutcome`]. A
//! request that is allowed through first reports [`ScanOutcome::Scanning`]
//! and then one terminal outcome; a refused request reports only the
//! refusal.
//!
//! ```text
//!              ┌── WaitingForCooldown(remaining)
//! request ─────┼── Throttled(message, retry_after)
//!              ├── Error("WiFi is disabled...")
//!              └── Scanning ──┬── Success(fresh)
//!                             ├── Success(cached)
//!                             └── Error("Scan failed...")
//! ```

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::signal::RawNetworkObservation;

/// Reported when the radio collaborator says scanning is off
pub const WIFI_DISABLED_MESSAGE: &str = "WiFi is disabled. Please enable WiFi to scan.";

/// Reported when the window budget is spent
pub const THROTTLED_MESSAGE: &str =
    "Too many scan requests. Android limits scans to 4 per 2 minutes.";

/// Reported when a started scan failed and no cached results exist
pub const SCAN_FAILED_MESSAGE: &str = "Scan failed. Possible throttling by the system.";

/// Reported when the platform refused to start the scan and no cache exists
pub const START_FAILED_MESSAGE: &str =
    "Could not start scan. System may be throttling requests.";

/// State of one scan request, as delivered to the caller
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ScanOutcome {
    /// Request admitted; the radio is scanning
    Scanning,

    /// Too soon after the previous scan
    WaitingForCooldown {
        /// Milliseconds until the next scan may start
        remaining_ms: u64,
    },

    /// Scan budget for the current window is spent
    Throttled {
        /// Explanation for the user
        message: &'static str,
        /// Milliseconds until the window resets
        retry_after_ms: u64,
    },

    /// Scan produced results
    Success {
        /// Networks seen
        observations: Vec<RawNetworkObservation>,
        /// `true` when these came from the platform cache after a failure
        is_cached: bool,
    },

    /// Scan could not produce any results
    Error {
        /// Explanation for the user
        message: &'static str,
    },
}

impl ScanOutcome {
    /// Whether this outcome ends the request
    ///
    /// Only [`ScanOutcome::Scanning`] is followed by another outcome.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Scanning)
    }

    /// Whether the request was refused before reaching the radio
    pub fn is_refusal(&self) -> bool {
        matches!(self, Self::WaitingForCooldown { .. } | Self::Throttled { .. })
    }

    /// Milliseconds the caller should wait before retrying, when known
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::WaitingForCooldown { remaining_ms } => Some(*remaining_ms),
            Self::Throttled { retry_after_ms, .. } => Some(*retry_after_ms),
            _ => None,
        }
    }

    /// Observations carried by a successful outcome
    pub fn observations(&self) -> Option<&[RawNetworkObservation]> {
        match self {
            Self::Success { observations, .. } => Some(observations),
            _ => None,
        }
    }
}

/// What the radio collaborator reports once a triggered scan settles
#[derive(Debug, Clone, PartialEq)]
pub enum ScanCompletion {
    /// The scan finished with fresh results
    Fresh(Vec<RawNetworkObservation>),
    /// The scan ran but the platform reported no updated results
    Failed,
    /// The platform refused to start the scan at all
    StartFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn only_scanning_is_non_terminal() {
        assert!(!ScanOutcome::Scanning.is_terminal());
        assert!(ScanOutcome::WaitingForCooldown { remaining_ms: 1 }.is_terminal());
        assert!(ScanOutcome::Error { message: SCAN_FAILED_MESSAGE }.is_terminal());
        assert!(ScanOutcome::Success {
            observations: vec![],
            is_cached: true
        }
        .is_terminal());
    }

    #[test]
    fn retry_hints() {
        assert_eq!(
            ScanOutcome::WaitingForCooldown { remaining_ms: 29_000 }.retry_after_ms(),
            Some(29_000)
        );
        assert_eq!(
            ScanOutcome::Throttled {
                message: THROTTLED_MESSAGE,
                retry_after_ms: 5
            }
            .retry_after_ms(),
            Some(5)
        );
        assert_eq!(ScanOutcome::Scanning.retry_after_ms(), None);
        assert!(!ScanOutcome::Error { message: WIFI_DISABLED_MESSAGE }.is_refusal());
    }
}

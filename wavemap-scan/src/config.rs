//! Session configuration
//!
//! ```rust
//! use wavemap_scan::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{
//!     "policy": { "min_scan_interval_ms": 10000 },
//!     "scan_timeout_ms": 15000
//! }"#).unwrap();
//!
//! assert_eq!(config.policy.min_scan_interval_ms, 10_000);
//! assert_eq!(config.policy.max_scans_per_window, 4);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use wavemap_core::ScanPolicy;

use crate::SessionError;

/// Smallest usable outcome channel: `Scanning` plus one terminal outcome
pub const MIN_CHANNEL_CAPACITY: usize = 2;

/// Scan session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rate limits applied by the gate
    pub policy: ScanPolicy,
    /// Give up on a triggered scan after this many milliseconds
    pub scan_timeout_ms: Option<u64>,
    /// Buffer size of each request's outcome channel
    pub channel_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            policy: ScanPolicy::default(),
            scan_timeout_ms: None,
            channel_capacity: MIN_CHANNEL_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON document
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.channel_capacity < MIN_CHANNEL_CAPACITY {
            return Err(SessionError::InvalidConfig(
                "channel_capacity must be at least 2",
            ));
        }
        if self.policy.throttle_window_ms == 0 {
            return Err(SessionError::InvalidConfig(
                "policy.throttle_window_ms must be > 0",
            ));
        }
        if self.policy.max_scans_per_window == 0 {
            return Err(SessionError::InvalidConfig(
                "policy.max_scans_per_window must be > 0",
            ));
        }
        if self.scan_timeout_ms == Some(0) {
            return Err(SessionError::InvalidConfig("scan_timeout_ms must be > 0"));
        }
        Ok(())
    }

    /// Set the rate limits
    pub fn policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the scan timeout, rounded down to whole milliseconds but never
    /// below one
    pub fn scan_timeout(mut self, timeout: Duration) -> Self {
        let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.scan_timeout_ms = Some(ms.max(1));
        self
    }

    /// Wait for the platform indefinitely
    pub fn no_timeout(mut self) -> Self {
        self.scan_timeout_ms = None;
        self
    }

    /// Set the outcome channel capacity, clamped to the minimum
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(MIN_CHANNEL_CAPACITY);
        self
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.scan_timeout_ms.map(Duration::from_millis)
    }
}

//! Async collaborators of a scan session
//!
//! [`ScanProvider`] is the platform WiFi scanner seen from async code;
//! [`ScanSink`] receives every successful result so it can be persisted.

use async_trait::async_trait;
use thiserror::Error;
use wavemap_core::{RawNetworkObservation, ScanCompletion};

/// Platform WiFi scanner
///
/// Implementations wrap the OS scan API. `trigger_scan` should resolve once
/// the platform reports back, however long that takes; the session applies
/// its own timeout when configured.
#[async_trait]
pub trait ScanProvider: Send + Sync {
    /// Whether the radio is on and allowed to scan
    async fn is_scanning_enabled(&self) -> bool;

    /// Start a scan and wait for it to settle
    async fn trigger_scan(&self) -> ScanCompletion;

    /// Results still held from an earlier scan
    async fn cached_observations(&self) -> Vec<RawNetworkObservation>;
}

/// Errors a sink may report
#[derive(Debug, Error)]
pub enum SinkError {
    /// Storage rejected the write
    #[error("storage error: {0}")]
    Storage(String),

    /// Storage is not reachable right now
    #[error("sink unavailable")]
    Unavailable,
}

/// Destination for successful scan results
#[async_trait]
pub trait ScanSink: Send + Sync {
    /// Store one scan result
    async fn record(
        &self,
        observations: &[RawNetworkObservation],
        is_cached: bool,
    ) -> Result<(), SinkError>;
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl ScanSink for NullSink {
    async fn record(&self, _: &[RawNetworkObservation], _: bool) -> Result<(), SinkError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn null_sink_accepts_everything() {
        assert!(NullSink.record(&[], true).await.is_ok());
    }

    #[test]
    fn sink_error_messages() {
        assert_eq!(SinkError::Storage("disk full".into()).to_string(), "storage error: disk full");
        assert_eq!(SinkError::Unavailable.to_string(), "sink unavailable");
    }
}

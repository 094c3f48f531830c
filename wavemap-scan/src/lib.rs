//! Async scan sessions for Wavemap
//!
//! ## Overview
//!
//! `wavemap-core` decides whether a scan may run; this crate runs it. A
//! [`ScanSession`] owns the rate-limiting gate, talks to the platform
//! through a [`ScanProvider`], and hands every request back as an ordered
//! stream of [`ScanOutcome`](wavemap_core::ScanOutcome) values on a tokio
//! channel.
//!
//! ## Collaborators
//!
//! | Trait            | Supplied by          | Role                             |
//! |------------------|----------------------|----------------------------------|
//! | [`ScanProvider`] | platform layer       | radio state, trigger, cache      |
//! | [`ScanSink`]     | persistence layer    | stores successful results        |
//! | `TimeSource`     | caller               | millisecond clock for the gate   |
//!
//! ## Outcome ordering
//!
//! Every receiver yields either exactly one refusal, or `Scanning`
//! followed by exactly one terminal outcome, and then closes.
//!
//! ## Example Usage
//!
//! ```rust
//! use async_trait::async_trait;
//! use wavemap_core::{RawNetworkObservation, ScanCompletion, ScanOutcome};
//! use wavemap_scan::{ScanProvider, ScanSession, SessionConfig};
//!
//! struct FixedRadio;
//!
//! #[async_trait]
//! impl ScanProvider for FixedRadio {
//!     async fn is_scanning_enabled(&self) -> bool {
//!         true
//!     }
//!     async fn trigger_scan(&self) -> ScanCompletion {
//!         ScanCompletion::Fresh(vec![RawNetworkObservation::new(
//!             "office", "aa:bb:cc:dd:ee:ff", -51, 2437, "[ESS]",
//!         )])
//!     }
//!     async fn cached_observations(&self) -> Vec<RawNetworkObservation> {
//!         Vec::new()
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let session = ScanSession::new(FixedRadio, SessionConfig::default());
//! let mut outcomes = session.request_scan().await;
//!
//! assert_eq!(outcomes.recv().await, Some(ScanOutcome::Scanning));
//! assert!(matches!(outcomes.recv().await, Some(ScanOutcome::Success { .. })));
//! assert_eq!(outcomes.recv().await, None);
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod provider;
pub mod session;

pub use clock::TokioClock;
pub use config::SessionConfig;
pub use provider::{NullSink, ScanProvider, ScanSink, SinkError};
pub use session::{wait_hint, ScanSession, SessionStats, SCAN_TIMEOUT_MESSAGE};

use thiserror::Error;

/// Errors raised while setting up a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Configuration document is not valid JSON for [`SessionConfig`]
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but a value is unusable
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

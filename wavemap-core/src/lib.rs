//! Core engine for Wavemap
//!
//! Turns WiFi site-survey measurements into coverage heatmaps and keeps
//! scan requests inside the platform's scan budget. Everything here is
//! synchronous and free of I/O; timekeeping, the radio and persistence are
//! supplied by the caller through traits.
//!
//! Key constraints:
//! - Positions are percentages of the floor plan, `[0, 100]` on each axis
//! - Builds without `std` (needs `alloc`)
//! - Deterministic: same samples and clock readings, same output
//!
//! ```rust
//! use wavemap_core::{interpolate, Admission, ScanGate, SignalSample};
//!
//! let samples = vec![
//!     SignalSample::single(20.0, 30.0, -45).unwrap(),
//!     SignalSample::single(80.0, 70.0, -82).unwrap(),
//! ];
//! let grid = interpolate(&samples, 50, 50, 2.0);
//! assert_eq!(grid.width(), 50);
//!
//! let mut gate = ScanGate::new();
//! assert_eq!(gate.admit(0, true), Admission::Proceed);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod constants;
pub mod errors;
pub mod heatmap;
pub mod interpolation;
pub mod sample;
pub mod scan;
pub mod signal;
pub mod survey;
pub mod time;

// Public API
pub use errors::{SampleError, SampleResult};
pub use heatmap::{HeatmapAssembler, HeatmapSurface, SampleFilter, SampleSource};
pub use interpolation::{interpolate, IdwInterpolator, InterpolatedGrid};
pub use sample::SignalSample;
pub use scan::{Admission, RadioScanner, ScanCompletion, ScanGate, ScanOutcome, ScanPolicy};
pub use signal::{FrequencyBand, NetworkId, RawNetworkObservation, SignalLevel};
pub use survey::{aggregate_samples, MemorySurveyStore, SurveyLog};
pub use time::{TimeSource, Timestamp};

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

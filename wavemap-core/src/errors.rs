//! Error Types for Survey Data Construction
//!
//! ## Design Philosophy
//!
//! Wavemap reports almost everything as a value rather than an error: an
//! empty sample set is a "no coverage" grid, a refused scan is a
//! [`ScanOutcome`](crate::scan::ScanOutcome). The errors in this module are
//! the few places where a caller hands the engine data that cannot describe
//! a real measurement.
//!
//! Like the rest of the core, errors stay small and `Copy`, carry no heap
//! data, and give enough context to fix the input without a second query.
//!
//! ## Error Categories
//!
//! - `EmptySample`: an aggregate claiming zero observations
//! - `CoordinateOutOfRange`: a position outside the 0-100% floor plan
//! - `InvalidRssi`: NaN or infinite signal strength
//! - `InconsistentRange`: minimum RSSI reported above the maximum
//!
//! Precondition violations on the interpolator (grid smaller than 2x2,
//! non-positive power) are programming errors and panic instead.
//!
//! ```rust
//! use wavemap_core::{SampleError, SignalSample};
//!
//! match SignalSample::new(10.0, 20.0, -55.0, -60, -50, 0) {
//!     Err(SampleError::EmptySample) => {} // nothing was measured here
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for sample construction
pub type SampleResult<T> = Result<T, SampleError>;

/// Reasons a [`SignalSample`](crate::SignalSample) cannot be built
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    /// The aggregate holds no observations
    #[error("Sample must aggregate at least one observation")]
    EmptySample,

    /// Position lies outside the floor plan
    #[error("Coordinate ({x}, {y}) outside [0, 100]")]
    CoordinateOutOfRange {
        /// Horizontal position in percent of image width
        x: f64,
        /// Vertical position in percent of image height
        y: f64,
    },

    /// Average RSSI is NaN or infinite
    #[error("Invalid RSSI: not a finite number")]
    InvalidRssi,

    /// Minimum RSSI above maximum RSSI
    #[error("RSSI range [{min}, {max}] is inverted")]
    InconsistentRange {
        /// Reported minimum RSSI in dBm
        min: i32,
        /// Reported maximum RSSI in dBm
        max: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_carry_context() {
        let err = SampleError::CoordinateOutOfRange { x: 120.0, y: 5.0 };
        assert_eq!(err.to_string(), "Coordinate (120, 5) outside [0, 100]");

        let err = SampleError::InconsistentRange { min: -40, max: -70 };
        assert_eq!(err.to_string(), "RSSI range [-40, -70] is inverted");
    }
}

//! Aggregated Signal Samples
//!
//! A [`SignalSample`] is the interpolator's only input: one marked position
//! on the floor plan with the RSSI readings taken there already averaged.
//! Positions are percentages of the floor plan image so the same survey can
//! be rendered at any resolution.
//!
//! Samples are immutable once built. The constructor is the only way in, and
//! it refuses an aggregate of zero observations, so every sample the
//! interpolator ever sees stands for at least one real reading.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_SPAN;
use crate::errors::{SampleError, SampleResult};

/// One aggregated measurement location
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SignalSample {
    x: f64,
    y: f64,
    avg_rssi: f64,
    min_rssi: i32,
    max_rssi: i32,
    sample_count: u32,
}

impl SignalSample {
    /// Build a sample from pre-aggregated values
    ///
    /// `x` and `y` are percentages in `[0, 100]`. `avg_rssi` must be finite
    /// and `sample_count` must be at least one.
    pub fn new(
        x: f64,
        y: f64,
        avg_rssi: f64,
        min_rssi: i32,
        max_rssi: i32,
        sample_count: u32,
    ) -> SampleResult<Self> {
        if sample_count == 0 {
            return Err(SampleError::EmptySample);
        }
        if !in_percent_range(x) || !in_percent_range(y) {
            return Err(SampleError::CoordinateOutOfRange { x, y });
        }
        if !avg_rssi.is_finite() {
            return Err(SampleError::InvalidRssi);
        }
        if min_rssi > max_rssi {
            return Err(SampleError::InconsistentRange {
                min: min_rssi,
                max: max_rssi,
            });
        }

        Ok(Self {
            x,
            y,
            avg_rssi,
            min_rssi,
            max_rssi,
            sample_count,
        })
    }

    /// Sample backed by a single reading
    pub fn single(x: f64, y: f64, rssi: i32) -> SampleResult<Self> {
        Self::new(x, y, rssi as f64, rssi, rssi, 1)
    }

    /// Aggregate raw RSSI readings taken at one position
    ///
    /// Returns [`SampleError::EmptySample`] for an empty slice.
    pub fn from_readings(x: f64, y: f64, readings: &[i32]) -> SampleResult<Self> {
        let (first, rest) = readings.split_first().ok_or(SampleError::EmptySample)?;

        let mut min = *first;
        let mut max = *first;
        let mut sum = *first as i64;
        for &r in rest {
            min = min.min(r);
            max = max.max(r);
            sum += r as i64;
        }

        let count = readings.len() as u32;
        Self::new(x, y, sum as f64 / count as f64, min, max, count)
    }

    /// Horizontal position (% of image width)
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical position (% of image height)
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Mean RSSI at this position (dBm)
    pub fn avg_rssi(&self) -> f64 {
        self.avg_rssi
    }

    /// Weakest reading at this position (dBm)
    pub fn min_rssi(&self) -> i32 {
        self.min_rssi
    }

    /// Strongest reading at this position (dBm)
    pub fn max_rssi(&self) -> i32 {
        self.max_rssi
    }

    /// Number of readings averaged, always at least one
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Euclidean distance to a position, in percentage units
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        libm::sqrt(dx * dx + dy * dy)
    }
}

fn in_percent_range(v: f64) -> bool {
    v.is_finite() && (0.0..=PERCENT_SPAN).contains(&v)
}

/// Deserialization goes through [`SignalSample::new`] so stored data cannot
/// bypass the invariants.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SignalSample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            x: f64,
            y: f64,
            avg_rssi: f64,
            min_rssi: i32,
            max_rssi: i32,
            sample_count: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        SignalSample::new(
            raw.x,
            raw.y,
            raw.avg_rssi,
            raw.min_rssi,
            raw.max_rssi,
            raw.sample_count,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_count() {
        assert_eq!(
            SignalSample::new(50.0, 50.0, -60.0, -65, -55, 0),
            Err(SampleError::EmptySample)
        );
        assert_eq!(
            SignalSample::from_readings(50.0, 50.0, &[]),
            Err(SampleError::EmptySample)
        );
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            SignalSample::new(100.5, 0.0, -60.0, -60, -60, 1),
            Err(SampleError::CoordinateOutOfRange { .. })
        ));
        assert!(matches!(
            SignalSample::new(f64::NAN, 0.0, -60.0, -60, -60, 1),
            Err(SampleError::CoordinateOutOfRange { .. })
        ));
        assert_eq!(
            SignalSample::new(1.0, 1.0, f64::INFINITY, -60, -60, 1),
            Err(SampleError::InvalidRssi)
        );
        assert_eq!(
            SignalSample::new(1.0, 1.0, -60.0, -50, -70, 2),
            Err(SampleError::InconsistentRange { min: -50, max: -70 })
        );
    }

    #[test]
    fn aggregates_readings() {
        let s = SignalSample::from_readings(10.0, 90.0, &[-60, -70, -65]).unwrap();
        assert_eq!(s.sample_count(), 3);
        assert_eq!(s.min_rssi(), -70);
        assert_eq!(s.max_rssi(), -60);
        assert!((s.avg_rssi() - (-65.0)).abs() < 1e-12);
    }

    #[test]
    fn distance_is_euclidean() {
        let s = SignalSample::single(0.0, 0.0, -40).unwrap();
        assert!((s.distance_to(3.0, 4.0) - 5.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_enforces_invariants() {
        let ok = r#"{"x":1.0,"y":2.0,"avg_rssi":-50.0,"min_rssi":-50,"max_rssi":-50,"sample_count":1}"#;
        let s: SignalSample = serde_json::from_str(ok).unwrap();
        assert_eq!(s.x(), 1.0);

        let empty = r#"{"x":1.0,"y":2.0,"avg_rssi":-50.0,"min_rssi":-50,"max_rssi":-50,"sample_count":0}"#;
        assert!(serde_json::from_str::<SignalSample>(empty).is_err());
    }
}

//! Inverse Distance Weighting
//!
//! Every grid cell is a weighted mean of all sample values, each weighted
//! by `1 / d^p` where `d` is the cell's distance to the sample:
//!
//! ```text
//! value(x, y) = Σ(wᵢ · vᵢ) / Σ(wᵢ)      wᵢ = 1 / dᵢ^p
//! ```
//!
//! Because the weights are positive and normalised, the result is a convex
//! combination and never leaves `[min(vᵢ), max(vᵢ)]`. Larger `p` makes the
//! nearest samples dominate; `p = 2` is the usual choice for indoor surveys.
//!
//! The weights are evaluated as `(d_min / dᵢ)^p` with `d_min` the nearest
//! sample distance. That is the same ratio, but the largest weight is always
//! 1, so `d^p` cannot overflow or underflow into a bogus result at large `p`.
//!
//! A cell closer than [`COINCIDENCE_DISTANCE_PCT`] to a sample takes that
//! sample's value outright. This avoids the `1 / 0` blow-up and is what the
//! user sees when standing on a measured spot.
//!
//! Cost is `O(width · height · samples)`. There is no spatial index: a
//! survey has tens of points, and any pruning would have to reproduce the
//! full sum exactly.

use crate::constants::{
    COINCIDENCE_DISTANCE_PCT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_IDW_POWER,
    NO_COVERAGE_RSSI_DBM,
};
use crate::sample::SignalSample;

use super::grid::InterpolatedGrid;

/// IDW interpolator with a fixed power exponent
///
/// Stateless apart from the exponent; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdwInterpolator {
    power: f64,
}

impl Default for IdwInterpolator {
    fn default() -> Self {
        Self {
            power: DEFAULT_IDW_POWER,
        }
    }
}

impl IdwInterpolator {
    /// Create an interpolator with the given power exponent
    ///
    /// # Panics
    ///
    /// If `power` is not a finite number greater than zero.
    pub fn new(power: f64) -> Self {
        assert!(
            power.is_finite() && power > 0.0,
            "IDW power must be finite and > 0, got {}",
            power
        );
        Self { power }
    }

    /// Power exponent
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Interpolate onto the default 100 x 100 grid
    pub fn interpolate_default(&self, samples: &[SignalSample]) -> InterpolatedGrid {
        self.interpolate(samples, DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }

    /// Interpolate onto a `grid_width x grid_height` grid
    ///
    /// An empty sample set yields a grid filled with -100 dBm.
    ///
    /// # Panics
    ///
    /// If either dimension is below 2.
    pub fn interpolate(
        &self,
        samples: &[SignalSample],
        grid_width: usize,
        grid_height: usize,
    ) -> InterpolatedGrid {
        assert!(grid_width >= 2, "grid width must be >= 2, got {}", grid_width);
        assert!(grid_height >= 2, "grid height must be >= 2, got {}", grid_height);

        if samples.is_empty() {
            return InterpolatedGrid::filled(grid_width, grid_height, NO_COVERAGE_RSSI_DBM);
        }

        InterpolatedGrid::from_fn(grid_width, grid_height, |gx, gy| {
            self.value_at(samples, gx, gy)
        })
    }

    /// Estimate RSSI at a single percentage position
    ///
    /// When several samples lie inside the coincidence radius the nearest
    /// one wins, and an exact tie goes to the stronger value. The whole
    /// sample set is always visited, so the answer does not depend on the
    /// order samples are passed in.
    pub fn value_at(&self, samples: &[SignalSample], x: f64, y: f64) -> f64 {
        let mut coincident: Option<(f64, f64)> = None;
        let mut nearest = f64::INFINITY;

        for sample in samples {
            let distance = sample.distance_to(x, y);

            if distance < COINCIDENCE_DISTANCE_PCT {
                let candidate = (distance, sample.avg_rssi());
                coincident = match coincident {
                    Some(best) if !closer(candidate, best) => Some(best),
                    _ => Some(candidate),
                };
            } else if distance < nearest {
                nearest = distance;
            }
        }

        if let Some((_, value)) = coincident {
            return value;
        }

        // Weights are scaled by nearest^p so the largest is exactly 1
        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        for sample in samples {
            let weight = libm::pow(nearest / sample.distance_to(x, y), self.power);
            weighted_sum += weight * sample.avg_rssi();
            weight_sum += weight;
        }

        if weight_sum > 0.0 && weight_sum.is_finite() {
            weighted_sum / weight_sum
        } else {
            NO_COVERAGE_RSSI_DBM
        }
    }
}

/// Nearer wins; equal distance goes to the stronger signal
fn closer(candidate: (f64, f64), best: (f64, f64)) -> bool {
    candidate.0 < best.0 || (candidate.0 == best.0 && candidate.1 > best.1)
}

/// Interpolate `samples` onto a `grid_width x grid_height` grid with IDW
///
/// Shorthand for `IdwInterpolator::new(power).interpolate(..)`.
///
/// # Panics
///
/// If `grid_width < 2`, `grid_height < 2`, or `power` is not a finite number
/// greater than zero.
pub fn interpolate(
    samples: &[SignalSample],
    grid_width: usize,
    grid_height: usize,
    power: f64,
) -> InterpolatedGrid {
    IdwInterpolator::new(power).interpolate(samples, grid_width, grid_height)
}

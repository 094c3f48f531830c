//! Interpolation Defaults
//!
//! Floor plan positions are percentages of the image size, so every
//! distance the interpolator computes is in percentage units.

/// Default grid width (cells). One cell per percent of image width.
pub const DEFAULT_GRID_WIDTH: usize = 100;

/// Default grid height (cells). One cell per percent of image height.
pub const DEFAULT_GRID_HEIGHT: usize = 100;

/// Default IDW power exponent.
///
/// 2.0 is the conventional choice: influence falls off with the square of
/// distance.
pub const DEFAULT_IDW_POWER: f64 = 2.0;

/// Radius inside which a grid cell takes a sample's value directly
/// (percentage units).
///
/// Below this distance `1 / d^p` grows without bound and the cell is for all
/// practical purposes the measured position.
pub const COINCIDENCE_DISTANCE_PCT: f64 = 0.1;

/// Full span of a percentage coordinate axis.
pub const PERCENT_SPAN: f64 = 100.0;

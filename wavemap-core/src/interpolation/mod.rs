//! Spatial interpolation of survey samples
//!
//! Turns a sparse set of [`SignalSample`](crate::SignalSample)s into a dense
//! [`InterpolatedGrid`] with inverse distance weighting. Pure computation:
//! no state, no I/O, safe to call from any thread.
//!
//! ```rust
//! use wavemap_core::interpolation::interpolate;
//! use wavemap_core::SignalSample;
//!
//! let samples = [
//!     SignalSample::single(20.0, 30.0, -45).unwrap(),
//!     SignalSample::single(80.0, 60.0, -78).unwrap(),
//! ];
//!
//! let grid = interpolate(&samples, 100, 100, 2.0);
//! assert_eq!(grid.width(), 100);
//! ```

mod grid;
mod idw;

pub use grid::InterpolatedGrid;
pub use idw::{interpolate, IdwInterpolator};

//! Constants for Wavemap Core
//!
//! Every numeric value the engine depends on lives here, grouped by domain,
//! with the unit in the name and a note on where the number comes from.
//!
//! ## Organization
//!
//! - **Scan**: platform scan throttling limits
//! - **Signal**: RSSI sentinels, quality thresholds and frequency bands
//! - **Interpolation**: IDW defaults and the coincidence radius

/// Platform scan throttling limits used by the scan gate.
pub mod scan;

/// RSSI reference values, quality thresholds and WiFi band edges.
pub mod signal;

/// Defaults for the inverse distance weighting interpolator.
pub mod interpolation;

pub use scan::{MIN_SCAN_INTERVAL_MS, THROTTLE_WARNING_AFTER_SCANS, THROTTLE_WINDOW_MS};

pub use signal::{
    NO_COVERAGE_RSSI_DBM, RSSI_EXCELLENT_DBM, RSSI_FAIR_DBM, RSSI_GOOD_DBM, RSSI_POOR_DBM,
    RSSI_VERY_WEAK_DBM,
};

pub use interpolation::{
    COINCIDENCE_DISTANCE_PCT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_IDW_POWER,
    PERCENT_SPAN,
};

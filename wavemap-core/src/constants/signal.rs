//! Signal Strength Reference Values
//!
//! RSSI is reported in dBm. Values are negative; closer to zero is stronger.
//! Indoor WiFi readings usually sit between -30 dBm (next to the access
//! point) and -90 dBm (barely usable).

// ===== SENTINELS =====

/// RSSI used wherever there is nothing to infer from (dBm).
///
/// Grids built from an empty sample set are filled with this value so the
/// renderer shows "no coverage" rather than a misleading zero.
pub const NO_COVERAGE_RSSI_DBM: f64 = -100.0;

// ===== QUALITY THRESHOLDS =====

/// Lower bound of "excellent" signal (dBm).
pub const RSSI_EXCELLENT_DBM: i32 = -50;

/// Lower bound of "good" signal (dBm).
pub const RSSI_GOOD_DBM: i32 = -60;

/// Lower bound of "fair" signal (dBm).
pub const RSSI_FAIR_DBM: i32 = -70;

/// Lower bound of "poor" / "weak" signal (dBm).
pub const RSSI_POOR_DBM: i32 = -80;

/// Lower bound of "very weak" signal (dBm). Anything below is no signal.
pub const RSSI_VERY_WEAK_DBM: i32 = -90;

// ===== FREQUENCY BANDS =====

/// Lowest channel centre frequency counted as 2.4 GHz (MHz).
pub const BAND_2_4GHZ_MIN_MHZ: u32 = 2400;

/// Highest channel centre frequency counted as 2.4 GHz (MHz).
///
/// Channel 14 sits at 2484 MHz; the bound leaves headroom for drivers that
/// round.
pub const BAND_2_4GHZ_MAX_MHZ: u32 = 2500;

/// Lowest channel centre frequency counted as 5 GHz (MHz).
pub const BAND_5GHZ_MIN_MHZ: u32 = 4900;

/// Highest channel centre frequency counted as 5 GHz (MHz).
///
/// Channel 177 sits at 5885 MHz.
pub const BAND_5GHZ_MAX_MHZ: u32 = 5900;

/// Split point used when only a coarse band label is needed (MHz).
pub const BAND_LABEL_SPLIT_MHZ: u32 = 3000;

/// SSID reported for networks that do not broadcast a name.
pub const HIDDEN_NETWORK_SSID: &str = "<Hidden Network>";

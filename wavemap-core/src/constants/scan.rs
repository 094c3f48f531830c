//! Scan Throttling Constants
//!
//! Android 8+ lets a foreground app start four WiFi scans in any two minute
//! period and silently serves cached results beyond that. The gate enforces
//! the same budget on its own side so the user gets an accurate countdown
//! instead of stale data.

/// Minimum delay between two consecutive scan attempts (milliseconds).
///
/// Four scans per two minutes averages out to one every 30 seconds; spacing
/// attempts this far apart keeps a steady walk-and-scan survey under the
/// platform budget.
///
/// Source: Android WifiManager scan throttling documentation
pub const MIN_SCAN_INTERVAL_MS: u64 = 30_000;

/// Length of the throttling window (milliseconds).
///
/// Source: Android WifiManager scan throttling documentation (2 minutes)
pub const THROTTLE_WINDOW_MS: u64 = 120_000;

/// Number of scans allowed inside one throttling window.
///
/// A request arriving once this many scans were started in the current
/// window is reported as throttled without touching the radio.
///
/// Source: Android WifiManager scan throttling documentation
pub const THROTTLE_WARNING_AFTER_SCANS: u32 = 4;

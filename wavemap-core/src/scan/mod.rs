//! WiFi scan admission
//!
//! - [`ScanGate`]: counters plus the admit/resolve decision logic
//! - [`RadioScanner`]: blocking radio collaborator
//! - [`ScanOutcome`]: what each request reports back
//!
//! ```rust
//! use wavemap_core::scan::{Admission, ScanGate, ScanOutcome};
//!
//! let mut gate = ScanGate::new();
//! assert_eq!(gate.admit(0, true), Admission::Proceed);
//!
//! // One second later the cooldown still applies
//! assert_eq!(
//!     gate.admit(1_000, true),
//!     Admission::Refused(ScanOutcome::WaitingForCooldown { remaining_ms: 29_000 }),
//! );
//! ```

mod gate;
mod outcome;
mod radio;

pub use gate::{Admission, ScanGate, ScanGateState, ScanPolicy};
pub use outcome::{
    ScanCompletion, ScanOutcome, SCAN_FAILED_MESSAGE, START_FAILED_MESSAGE, THROTTLED_MESSAGE,
    WIFI_DISABLED_MESSAGE,
};
pub use radio::RadioScanner;

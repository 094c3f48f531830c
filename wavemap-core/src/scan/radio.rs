//! Radio collaborator interface
//!
//! The gate never talks to hardware. Whoever embeds it supplies a
//! [`RadioScanner`] wrapping the platform WiFi API (or a recording, or a
//! test double).

use alloc::vec::Vec;

use super::outcome::ScanCompletion;
use crate::signal::RawNetworkObservation;

/// Blocking access to the platform WiFi scanner
///
/// The async counterpart used by scan sessions lives in `wavemap-scan`.
pub trait RadioScanner {
    /// Whether the radio is on and allowed to scan
    fn is_scanning_enabled(&self) -> bool;

    /// Start a scan and block until the platform reports back
    ///
    /// Return [`ScanCompletion::StartFailed`] if the platform refused to
    /// start, [`ScanCompletion::Failed`] if it ran without updating results.
    fn trigger_scan(&mut self) -> ScanCompletion;

    /// Results the platform still holds from an earlier scan
    fn cached_observations(&self) -> Vec<RawNetworkObservation>;
}

impl<R: RadioScanner + ?Sized> RadioScanner for &mut R {
    fn is_scanning_enabled(&self) -> bool {
        (**self).is_scanning_enabled()
    }

    fn trigger_scan(&mut self) -> ScanCompletion {
        (**self).trigger_scan()
    }

    fn cached_observations(&self) -> Vec<RawNetworkObservation> {
        (**self).cached_observations()
    }
}

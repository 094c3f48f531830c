//! Scan admission and rate control
//!
//! ## Overview
//!
//! Mobile platforms throttle WiFi scans. Android 8+ allows a foreground app
//! four scans in any two minutes; past that, `startScan()` still "succeeds"
//! but the results are stale. The [`ScanGate`] models that budget on the
//! caller's side so every request gets an honest answer: go ahead, wait
//! this long, or you are throttled until then.
//!
//! Two limits apply at once:
//!
//! 1. **Cooldown**: at least `min_scan_interval_ms` between attempts.
//! 2. **Window budget**: at most `max_scans_per_window` attempts per
//!    `throttle_window_ms`. The window opens at the first attempt after a
//!    reset and closes once that much time has passed.
//!
//! ## State Machine
//!
//! ```text
//!          admit(now, enabled)
//! Idle ─────────────────────────┬─ radio off ───────► Error
//!                               ├─ budget spent ────► Throttled
//!                               ├─ too soon ────────► WaitingForCooldown
//!                               └─ ok ──► Scanning ──► resolve(completion)
//!                                                       ├─ Success(fresh)
//!                                                       ├─ Success(cached)
//!                                                       └─ Error
//! ```
//!
//! Counters change in exactly one place: an admitted attempt. Refusals
//! leave them alone. A scan that fails afterwards, or never starts, still
//! counts, because the platform counts it too.
//!
//! ## Concurrency
//!
//! The gate is a plain value with `&mut self` methods. Give it one owner;
//! if several tasks share it, hold one lock across [`ScanGate::admit`] so
//! two requests cannot both see budget left. The scan itself happens after
//! `admit` returns and needs no lock.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::outcome::{
    ScanCompletion, ScanOutcome, SCAN_FAILED_MESSAGE, START_FAILED_MESSAGE, THROTTLED_MESSAGE,
    WIFI_DISABLED_MESSAGE,
};
use super::radio::RadioScanner;
use crate::constants::{MIN_SCAN_INTERVAL_MS, THROTTLE_WARNING_AFTER_SCANS, THROTTLE_WINDOW_MS};
use crate::signal::RawNetworkObservation;
use crate::time::{elapsed_ms, Timestamp};
use alloc::vec::Vec;

/// Throttling limits enforced by a [`ScanGate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanPolicy {
    /// Minimum milliseconds between two attempts
    pub min_scan_interval_ms: u64,
    /// Length of the rolling budget window in milliseconds
    pub throttle_window_ms: u64,
    /// Attempts allowed per window
    pub max_scans_per_window: u32,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            min_scan_interval_ms: MIN_SCAN_INTERVAL_MS,
            throttle_window_ms: THROTTLE_WINDOW_MS,
            max_scans_per_window: THROTTLE_WARNING_AFTER_SCANS,
        }
    }
}

impl ScanPolicy {
    /// Set the minimum interval between attempts
    pub fn with_min_interval_ms(mut self, ms: u64) -> Self {
        self.min_scan_interval_ms = ms;
        self
    }

    /// Set the budget window length
    pub fn with_window_ms(mut self, ms: u64) -> Self {
        self.throttle_window_ms = ms;
        self
    }

    /// Set the number of attempts per window
    pub fn with_max_scans(mut self, scans: u32) -> Self {
        self.max_scans_per_window = scans;
        self
    }
}

/// Snapshot of the gate's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanGateState {
    /// Time of the last admitted attempt, `None` before the first
    pub last_scan: Option<Timestamp>,
    /// Attempts admitted in the current window
    pub scan_count_in_window: u32,
    /// When the current window opened
    pub window_start: Timestamp,
}

/// Decision for one scan request
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Admission {
    /// Attempt recorded; trigger the scan now
    Proceed,
    /// Request refused; deliver this outcome and stop
    Refused(ScanOutcome),
}

/// Rate controller for WiFi scan requests
#[derive(Debug, Clone, Default)]
pub struct ScanGate {
    policy: ScanPolicy,
    state: ScanGateState,
}

impl ScanGate {
    /// Gate using the platform default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate with custom limits
    pub fn with_policy(policy: ScanPolicy) -> Self {
        Self {
            policy,
            state: ScanGateState::default(),
        }
    }

    /// Limits in force
    pub fn policy(&self) -> &ScanPolicy {
        &self.policy
    }

    /// Current counters
    pub fn state(&self) -> ScanGateState {
        self.state
    }

    /// Decide whether a scan requested at `now` may start
    ///
    /// On [`Admission::Proceed`] the attempt has already been counted; the
    /// caller should emit [`ScanOutcome::Scanning`] and trigger the scan.
    /// A disabled radio is refused before any limit is looked at and leaves
    /// every counter untouched.
    pub fn admit(&mut self, now: Timestamp, scanning_enabled: bool) -> Admission {
        if !scanning_enabled {
            log_debug!("scan refused at {}: radio disabled", now);
            return Admission::Refused(ScanOutcome::Error {
                message: WIFI_DISABLED_MESSAGE,
            });
        }

        self.roll_window(now);

        if let Some(refusal) = self.limit_refusal(now) {
            log_debug!("scan refused at {}: {:?}", now, refusal);
            return Admission::Refused(refusal);
        }

        self.record_attempt(now);
        log_debug!(
            "scan admitted at {} ({}/{} in window)",
            now,
            self.state.scan_count_in_window,
            self.policy.max_scans_per_window
        );
        Admission::Proceed
    }

    /// Turn a settled scan into its terminal outcome
    ///
    /// `cached` is only called when the scan failed or never started.
    pub fn resolve<F>(completion: ScanCompletion, cached: F) -> ScanOutcome
    where
        F: FnOnce() -> Vec<RawNetworkObservation>,
    {
        let failure_message = match completion {
            ScanCompletion::Fresh(observations) => {
                return ScanOutcome::Success {
                    observations,
                    is_cached: false,
                };
            }
            ScanCompletion::Failed => SCAN_FAILED_MESSAGE,
            ScanCompletion::StartFailed => START_FAILED_MESSAGE,
        };

        let cached = cached();
        if cached.is_empty() {
            log_warn!("scan failed with no cached results: {}", failure_message);
            ScanOutcome::Error {
                message: failure_message,
            }
        } else {
            log_warn!("scan failed, serving {} cached results", cached.len());
            ScanOutcome::Success {
                observations: cached,
                is_cached: true,
            }
        }
    }

    /// Run one complete request against a blocking radio
    ///
    /// `emit` receives either one refusal, or [`ScanOutcome::Scanning`]
    /// followed by one terminal outcome.
    pub fn request_scan<R, E>(&mut self, now: Timestamp, radio: &mut R, mut emit: E)
    where
        R: RadioScanner + ?Sized,
        E: FnMut(ScanOutcome),
    {
        match self.admit(now, radio.is_scanning_enabled()) {
            Admission::Refused(outcome) => emit(outcome),
            Admission::Proceed => {
                emit(ScanOutcome::Scanning);
                let completion = radio.trigger_scan();
                emit(Self::resolve(completion, || radio.cached_observations()));
            }
        }
    }

    /// Milliseconds until the cooldown would allow another attempt
    pub fn time_until_next_scan(&self, now: Timestamp) -> u64 {
        match self.state.last_scan {
            Some(last) => self
                .policy
                .min_scan_interval_ms
                .saturating_sub(elapsed_ms(last, now)),
            None => 0,
        }
    }

    /// Whether a request at `now` would be throttled, without changing state
    pub fn is_throttled(&self, now: Timestamp) -> bool {
        !self.window_expired(now)
            && self.state.scan_count_in_window >= self.policy.max_scans_per_window
    }

    /// Milliseconds until a request at `now + result` would pass both limits
    ///
    /// Does not consider the radio and does not change state.
    pub fn ready_in(&self, now: Timestamp) -> u64 {
        if self.is_throttled(now) {
            let in_window = elapsed_ms(self.state.window_start, now);
            let window_left = self.policy.throttle_window_ms.saturating_sub(in_window);
            window_left.max(self.time_until_next_scan(now))
        } else {
            self.time_until_next_scan(now)
        }
    }

    fn window_expired(&self, now: Timestamp) -> bool {
        elapsed_ms(self.state.window_start, now) >= self.policy.throttle_window_ms
    }

    fn roll_window(&mut self, now: Timestamp) {
        if self.window_expired(now) {
            self.state.scan_count_in_window = 0;
            self.state.window_start = now;
        }
    }

    fn limit_refusal(&self, now: Timestamp) -> Option<ScanOutcome> {
        if self.state.scan_count_in_window >= self.policy.max_scans_per_window {
            let in_window = elapsed_ms(self.state.window_start, now);
            return Some(ScanOutcome::Throttled {
                message: THROTTLED_MESSAGE,
                retry_after_ms: self.policy.throttle_window_ms.saturating_sub(in_window),
            });
        }

        let remaining_ms = self.time_until_next_scan(now);
        if remaining_ms > 0 {
            return Some(ScanOutcome::WaitingForCooldown { remaining_ms });
        }

        None
    }

    fn record_attempt(&mut self, now: Timestamp) {
        self.state.scan_count_in_window += 1;
        if self.state.scan_count_in_window == 1 {
            self.state.window_start = now;
        }
        self.state.last_scan = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn proceed(gate: &mut ScanGate, now: Timestamp) {
        assert_eq!(gate.admit(now, true), Admission::Proceed, "at t={}", now);
    }

    #[test]
    fn fresh_gate_admits_immediately() {
        let mut gate = ScanGate::new();
        assert_eq!(gate.time_until_next_scan(0), 0);
        proceed(&mut gate, 0);

        let state = gate.state();
        assert_eq!(state.last_scan, Some(0));
        assert_eq!(state.scan_count_in_window, 1);
        assert_eq!(state.window_start, 0);
    }

    #[test]
    fn cooldown_reports_remaining() {
        let mut gate = ScanGate::new();
        proceed(&mut gate, 10_000);

        assert_eq!(
            gate.admit(11_000, true),
            Admission::Refused(ScanOutcome::WaitingForCooldown {
                remaining_ms: 29_000
            })
        );
        assert_eq!(gate.state().scan_count_in_window, 1);

        proceed(&mut gate, 40_000);
    }

    #[test]
    fn fifth_attempt_in_window_is_throttled() {
        let mut gate = ScanGate::new();
        for t in [0, 30_000, 60_000, 90_000] {
            proceed(&mut gate, t);
        }

        match gate.admit(100_000, true) {
            Admission::Refused(ScanOutcome::Throttled { retry_after_ms, .. }) => {
                assert_eq!(retry_after_ms, 20_000);
            }
            other => panic!("expected throttle, got {:?}", other),
        }
        assert!(gate.is_throttled(100_000));
        assert_eq!(gate.state().scan_count_in_window, 4);
    }

    #[test]
    fn window_reset_readmits() {
        let mut gate = ScanGate::new();
        for t in [5_000, 35_000, 65_000, 95_000] {
            proceed(&mut gate, t);
        }
        assert!(gate.is_throttled(124_999));
        assert!(!gate.is_throttled(125_000));

        proceed(&mut gate, 125_000);
        let state = gate.state();
        assert_eq!(state.scan_count_in_window, 1);
        assert_eq!(state.window_start, 125_000);
    }

    #[test]
    fn throttle_takes_precedence_over_cooldown() {
        let policy = ScanPolicy::default().with_max_scans(1);
        let mut gate = ScanGate::with_policy(policy);
        proceed(&mut gate, 0);

        assert!(matches!(
            gate.admit(1_000, true),
            Admission::Refused(ScanOutcome::Throttled {
                retry_after_ms: 119_000,
                ..
            })
        ));
    }

    #[test]
    fn disabled_radio_never_touches_counters() {
        let mut gate = ScanGate::new();
        proceed(&mut gate, 0);
        let before = gate.state();

        for t in [1_000, 50_000, 500_000] {
            assert_eq!(
                gate.admit(t, false),
                Admission::Refused(ScanOutcome::Error {
                    message: WIFI_DISABLED_MESSAGE
                })
            );
        }
        assert_eq!(gate.state(), before);
    }

    #[test]
    fn disabled_radio_while_throttled_reports_disabled() {
        let mut gate = ScanGate::new();
        for t in [0, 30_000, 60_000, 90_000] {
            proceed(&mut gate, t);
        }
        let before = gate.state();
        assert!(gate.is_throttled(100_000));

        assert_eq!(
            gate.admit(100_000, false),
            Admission::Refused(ScanOutcome::Error {
                message: WIFI_DISABLED_MESSAGE
            })
        );
        assert_eq!(gate.state(), before);
        assert!(gate.is_throttled(100_000));
    }

    #[test]
    fn ready_in_covers_both_limits() {
        let mut gate = ScanGate::new();
        assert_eq!(gate.ready_in(0), 0);

        proceed(&mut gate, 0);
        assert_eq!(gate.ready_in(10_000), 20_000);

        for t in [30_000, 60_000, 90_000] {
            proceed(&mut gate, t);
        }
        assert_eq!(gate.ready_in(100_000), 20_000);
        assert_eq!(gate.ready_in(119_000), 1_000);
        assert_eq!(gate.ready_in(120_000), 0);
    }

    #[test]
    fn backwards_clock_means_full_cooldown() {
        let mut gate = ScanGate::new();
        proceed(&mut gate, 50_000);
        assert_eq!(gate.time_until_next_scan(40_000), 30_000);
    }

    #[test]
    fn resolve_prefers_fresh_then_cache() {
        let obs = RawNetworkObservation::new("lab", "00:11:22:33:44:55", -52, 5180, "[ESS]");

        let fresh = ScanGate::resolve(ScanCompletion::Fresh(vec![obs.clone()]), || {
            panic!("cache must not be read on success")
        });
        assert_eq!(
            fresh,
            ScanOutcome::Success {
                observations: vec![obs.clone()],
                is_cached: false
            }
        );

        let cached = ScanGate::resolve(ScanCompletion::Failed, || vec![obs.clone()]);
        assert_eq!(
            cached,
            ScanOutcome::Success {
                observations: vec![obs],
                is_cached: true
            }
        );

        assert_eq!(
            ScanGate::resolve(ScanCompletion::Failed, Vec::new),
            ScanOutcome::Error {
                message: SCAN_FAILED_MESSAGE
            }
        );
        assert_eq!(
            ScanGate::resolve(ScanCompletion::StartFailed, Vec::new),
            ScanOutcome::Error {
                message: START_FAILED_MESSAGE
            }
        );
    }
}

//! Scan Throttling Example
//!
//! Replays an impatient user tapping "scan" against a simulated radio and
//! shows which requests the gate lets through.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_scan_throttling
//! ```

use wavemap_core::{
    time::MockTimeSource, RadioScanner, RawNetworkObservation, ScanCompletion, ScanGate,
    ScanOutcome, TimeSource,
};

/// Radio that fails every third scan
struct FlakyRadio {
    scans: u32,
}

impl RadioScanner for FlakyRadio {
    fn is_scanning_enabled(&self) -> bool {
        true
    }

    fn trigger_scan(&mut self) -> ScanCompletion {
        self.scans += 1;
        if self.scans % 3 == 0 {
            ScanCompletion::Failed
        } else {
            ScanCompletion::Fresh(vec![RawNetworkObservation::new(
                "office",
                "aa:bb:cc:00:00:01",
                -50 - self.scans as i32,
                2437,
                "[ESS]",
            )])
        }
    }

    fn cached_observations(&self) -> Vec<RawNetworkObservation> {
        vec![RawNetworkObservation::new("office", "aa:bb:cc:00:00:01", -70, 2437, "[ESS]")]
    }
}

fn main() {
    println!("Wavemap Scan Throttling Example");
    println!("===============================\n");

    let clock = MockTimeSource::new(0);
    let mut gate = ScanGate::new();
    let mut radio = FlakyRadio { scans: 0 };

    // Seconds at which the user taps
    let taps = [0, 5, 31, 45, 62, 93, 100, 118, 121, 151];

    for tap in taps {
        clock.set(tap * 1_000);
        print!("t={:>3}s  ", tap);
        gate.request_scan(clock.now(), &mut radio, |outcome| match outcome {
            ScanOutcome::Scanning => print!("scanning -> "),
            ScanOutcome::WaitingForCooldown { remaining_ms } => {
                print!("cooldown, {} ms left", remaining_ms)
            }
            ScanOutcome::Throttled { retry_after_ms, .. } => {
                print!("throttled, retry in {} ms", retry_after_ms)
            }
            ScanOutcome::Success { observations, is_cached } => print!(
                "{} networks{}",
                observations.len(),
                if is_cached { " (cached)" } else { "" }
            ),
            ScanOutcome::Error { message } => print!("error: {}", message),
        });
        println!();
    }

    let state = gate.state();
    println!(
        "\n{} scans in the current window, opened at {} ms",
        state.scan_count_in_window, state.window_start
    );
}

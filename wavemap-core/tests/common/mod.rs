//! Common test utilities for integration tests
//!
//! This module provides:
//! - A scripted [`RadioScanner`] that replays canned completions
//! - Survey fixtures laid out on a floor plan
//! - Assertion helpers for grids

#![allow(dead_code)]

use std::collections::VecDeque;

use wavemap_core::{
    InterpolatedGrid, RadioScanner, RawNetworkObservation, ScanCompletion, SignalSample,
    SurveyLog,
};

/// Radio double that replays completions in order
///
/// Once the script runs dry every further scan reports `Failed`.
#[derive(Debug, Default)]
pub struct ScriptedRadio {
    pub enabled: bool,
    pub script: VecDeque<ScanCompletion>,
    pub cache: Vec<RawNetworkObservation>,
    pub triggers: usize,
}

impl ScriptedRadio {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn then(mut self, completion: ScanCompletion) -> Self {
        self.script.push_back(completion);
        self
    }

    pub fn with_cache(mut self, cache: Vec<RawNetworkObservation>) -> Self {
        self.cache = cache;
        self
    }
}

impl RadioScanner for ScriptedRadio {
    fn is_scanning_enabled(&self) -> bool {
        self.enabled
    }

    fn trigger_scan(&mut self) -> ScanCompletion {
        self.triggers += 1;
        self.script.pop_front().unwrap_or(ScanCompletion::Failed)
    }

    fn cached_observations(&self) -> Vec<RawNetworkObservation> {
        self.cache.clone()
    }
}

pub fn observation(ssid: &str, rssi: i32, frequency_mhz: u32) -> RawNetworkObservation {
    RawNetworkObservation::new(ssid, "02:00:00:00:00:01", rssi, frequency_mhz, "[WPA2-PSK-CCMP][ESS]")
}

pub fn sample(x: f64, y: f64, rssi: f64) -> SignalSample {
    SignalSample::new(x, y, rssi, rssi.floor() as i32, rssi.ceil() as i32, 1)
        .expect("valid test sample")
}

/// Small office: strong AP in the north-west corner, weak one south-east
///
/// Each position carries a 2.4 GHz and a 5 GHz reading of "office" and a
/// 2.4 GHz reading of "guest".
pub fn office_survey() -> Vec<SurveyLog> {
    let positions = [
        ((10.0, 10.0), -38, -44),
        ((50.0, 10.0), -55, -63),
        ((90.0, 10.0), -67, -78),
        ((10.0, 90.0), -60, -71),
        ((50.0, 50.0), -62, -70),
        ((90.0, 90.0), -81, -89),
    ];

    let mut logs = Vec::new();
    for (i, (pos, rssi_24, rssi_5)) in positions.into_iter().enumerate() {
        let at = i as u64 * 30_000;
        logs.push(SurveyLog::from_observation(pos, at, &observation("office", rssi_24, 2437)));
        logs.push(SurveyLog::from_observation(pos, at, &observation("office", rssi_5, 5240)));
        logs.push(SurveyLog::from_observation(pos, at, &observation("guest", rssi_24 - 6, 2462)));
    }
    logs
}

/// Assert every cell lies within `[lo, hi]`
pub fn assert_bounded(grid: &InterpolatedGrid, lo: f64, hi: f64) {
    for (i, j, v) in grid.iter() {
        assert!(
            v >= lo - 1e-9 && v <= hi + 1e-9,
            "cell ({}, {}) = {} outside [{}, {}]",
            i,
            j,
            v,
            lo,
            hi
        );
    }
}

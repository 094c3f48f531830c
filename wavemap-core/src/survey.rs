//! Survey log records and their aggregation into samples
//!
//! A survey is a list of [`SurveyLog`] rows: one per network seen per
//! position the user stood at. Heatmaps need one value per position, so
//! [`aggregate_samples`] groups rows by exact coordinate and folds each
//! group into a [`SignalSample`] (mean, min, max, count).
//!
//! [`MemorySurveyStore`] is an in-process [`SampleSource`] over a log list.
//! It backs tests and tools that do not need real persistence.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::heatmap::{SampleFilter, SampleSource};
use crate::sample::SignalSample;
use crate::signal::RawNetworkObservation;
use crate::time::Timestamp;

/// One network seen at one surveyed position
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurveyLog {
    /// Horizontal position, percent of floor-plan width
    pub x: f64,
    /// Vertical position, percent of floor-plan height
    pub y: f64,
    /// When the scan was taken
    pub timestamp: Timestamp,
    /// Network name
    pub ssid: String,
    /// Access point MAC
    pub bssid: String,
    /// Received strength in dBm
    pub rssi: i32,
    /// Channel centre frequency in MHz
    pub frequency_mhz: u32,
}

impl SurveyLog {
    /// Record `observation` as seen at `position`
    pub fn from_observation(
        position: (f64, f64),
        timestamp: Timestamp,
        observation: &RawNetworkObservation,
    ) -> Self {
        Self {
            x: position.0,
            y: position.1,
            timestamp,
            ssid: observation.ssid.clone(),
            bssid: observation.bssid.clone(),
            rssi: observation.rssi,
            frequency_mhz: observation.frequency_mhz,
        }
    }
}

/// Record a whole scan result at one position
pub fn logs_from_observations(
    position: (f64, f64),
    timestamp: Timestamp,
    observations: &[RawNetworkObservation],
) -> Vec<SurveyLog> {
    observations
        .iter()
        .map(|obs| SurveyLog::from_observation(position, timestamp, obs))
        .collect()
}

#[derive(Default)]
struct Accumulator {
    sum: i64,
    min: i32,
    max: i32,
    count: u32,
}

impl Accumulator {
    fn push(&mut self, rssi: i32) {
        if self.count == 0 {
            self.min = rssi;
            self.max = rssi;
        } else {
            self.min = self.min.min(rssi);
            self.max = self.max.max(rssi);
        }
        self.sum += i64::from(rssi);
        self.count += 1;
    }
}

/// Ordering key for a position; `+ 0.0` folds `-0.0` into `0.0`
fn position_key(x: f64, y: f64) -> (u64, u64) {
    ((x + 0.0).to_bits(), (y + 0.0).to_bits())
}

/// Group logs matching `filter` by position and fold each group
///
/// Output is ordered by `x`, then `y`. Logs with a position outside
/// `[0, 100]` are skipped.
pub fn aggregate_samples<'a, I>(logs: I, filter: &SampleFilter) -> Vec<SignalSample>
where
    I: IntoIterator<Item = &'a SurveyLog>,
{
    let mut groups: BTreeMap<(u64, u64), (f64, f64, Accumulator)> = BTreeMap::new();

    for log in logs {
        if !filter.matches(&log.ssid, log.frequency_mhz) {
            continue;
        }
        let entry = groups
            .entry(position_key(log.x, log.y))
            .or_insert_with(|| (log.x + 0.0, log.y + 0.0, Accumulator::default()));
        entry.2.push(log.rssi);
    }

    groups
        .into_values()
        .filter_map(|(x, y, acc)| {
            let avg = acc.sum as f64 / f64::from(acc.count);
            match SignalSample::new(x, y, avg, acc.min, acc.max, acc.count) {
                Ok(sample) => Some(sample),
                Err(_e) => {
                    log_warn!("survey: dropping group at ({}, {}): {}", x, y, _e);
                    None
                }
            }
        })
        .collect()
}

/// In-memory survey log list
#[derive(Debug, Clone, Default)]
pub struct MemorySurveyStore {
    logs: Vec<SurveyLog>,
}

impl MemorySurveyStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one log
    pub fn push(&mut self, log: SurveyLog) {
        self.logs.push(log);
    }

    /// Number of stored logs
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Stored logs in insertion order
    pub fn logs(&self) -> &[SurveyLog] {
        &self.logs
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.logs.clear();
    }
}

impl Extend<SurveyLog> for MemorySurveyStore {
    fn extend<T: IntoIterator<Item = SurveyLog>>(&mut self, iter: T) {
        self.logs.extend(iter);
    }
}

impl FromIterator<SurveyLog> for MemorySurveyStore {
    fn from_iter<T: IntoIterator<Item = SurveyLog>>(iter: T) -> Self {
        Self {
            logs: iter.into_iter().collect(),
        }
    }
}

impl SampleSource for MemorySurveyStore {
    type Error = Infallible;

    fn heatmap_samples(&self, filter: &SampleFilter) -> Result<Vec<SignalSample>, Self::Error> {
        Ok(aggregate_samples(&self.logs, filter))
    }

    fn distinct_ssids(&self) -> Result<Vec<String>, Self::Error> {
        let set: BTreeSet<&str> = self.logs.iter().map(|log| log.ssid.as_str()).collect();
        Ok(set.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FrequencyBand;

    fn log(x: f64, y: f64, ssid: &str, rssi: i32, freq: u32) -> SurveyLog {
        let obs = RawNetworkObservation::new(ssid, "00:11:22:33:44:55", rssi, freq, "");
        SurveyLog::from_observation((x, y), 0, &obs)
    }

    #[test]
    fn groups_by_position() {
        let logs = [
            log(10.0, 20.0, "a", -50, 2412),
            log(10.0, 20.0, "a", -60, 2412),
            log(10.0, 20.0, "b", -71, 2437),
            log(5.0, 90.0, "a", -80, 2412),
        ];
        let samples = aggregate_samples(&logs, &SampleFilter::all());

        assert_eq!(samples.len(), 2);
        assert_eq!((samples[0].x(), samples[0].y()), (5.0, 90.0));

        let s = &samples[1];
        assert_eq!(s.sample_count(), 3);
        assert_eq!(s.min_rssi(), -71);
        assert_eq!(s.max_rssi(), -50);
        assert!((s.avg_rssi() - (-181.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn filter_applies_before_grouping() {
        let logs = [
            log(10.0, 20.0, "a", -50, 2412),
            log(10.0, 20.0, "a", -40, 5180),
            log(30.0, 30.0, "b", -70, 5180),
        ];

        let five = aggregate_samples(&logs, &SampleFilter::all().with_band(FrequencyBand::Band5GHz));
        assert_eq!(five.len(), 2);
        assert_eq!(five[0].avg_rssi(), -40.0);

        let only_a = aggregate_samples(&logs, &SampleFilter::all().with_ssid("a"));
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].avg_rssi(), -45.0);
    }

    #[test]
    fn negative_zero_shares_a_group() {
        let logs = [log(0.0, 50.0, "a", -50, 2412), log(-0.0, 50.0, "a", -70, 2412)];
        let samples = aggregate_samples(&logs, &SampleFilter::all());
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].sample_count(), 2);
    }

    #[test]
    fn out_of_range_positions_are_dropped() {
        let logs = [log(150.0, 50.0, "a", -50, 2412), log(50.0, 50.0, "a", -60, 2412)];
        let samples = aggregate_samples(&logs, &SampleFilter::all());
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].x(), 50.0);
    }

    #[test]
    fn store_lists_sorted_unique_ssids() {
        let store: MemorySurveyStore = [
            log(1.0, 1.0, "zeta", -50, 2412),
            log(2.0, 2.0, "alpha", -50, 2412),
            log(3.0, 3.0, "zeta", -50, 2412),
        ]
        .into_iter()
        .collect();

        assert_eq!(store.len(), 3);
        assert_eq!(store.distinct_ssids().unwrap(), ["alpha", "zeta"]);
    }
}

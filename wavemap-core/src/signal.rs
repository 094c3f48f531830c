//! WiFi Network Observations and Signal Classification
//!
//! A [`RawNetworkObservation`] is one access point seen in one scan cycle,
//! exactly as the radio collaborator reported it. Observations are
//! ephemeral: the scan gate hands them to the caller, who either persists
//! them as survey logs or discards them.
//!
//! The classification helpers ([`SignalLevel`], [`FrequencyBand`]) are what
//! the rendering and filtering collaborators need to label a reading without
//! knowing dBm thresholds themselves.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::signal::{
    BAND_2_4GHZ_MAX_MHZ, BAND_2_4GHZ_MIN_MHZ, BAND_5GHZ_MAX_MHZ, BAND_5GHZ_MIN_MHZ,
    BAND_LABEL_SPLIT_MHZ, HIDDEN_NETWORK_SSID,
};
use crate::constants::{
    RSSI_EXCELLENT_DBM, RSSI_FAIR_DBM, RSSI_GOOD_DBM, RSSI_POOR_DBM, RSSI_VERY_WEAK_DBM,
};

/// WiFi frequency band selector
///
/// Used both to classify an observation and to filter stored samples.
/// `All` matches every frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrequencyBand {
    /// Every band
    #[default]
    All,
    /// 2.4 GHz (channels 1-14)
    Band2_4GHz,
    /// 5 GHz (channels 36-177)
    Band5GHz,
}

impl FrequencyBand {
    /// Inclusive frequency range in MHz, `None` for `All`
    pub fn range_mhz(self) -> Option<(u32, u32)> {
        match self {
            Self::All => None,
            Self::Band2_4GHz => Some((BAND_2_4GHZ_MIN_MHZ, BAND_2_4GHZ_MAX_MHZ)),
            Self::Band5GHz => Some((BAND_5GHZ_MIN_MHZ, BAND_5GHZ_MAX_MHZ)),
        }
    }

    /// Check whether a channel frequency falls in this band
    pub fn contains(self, frequency_mhz: u32) -> bool {
        match self.range_mhz() {
            None => true,
            Some((min, max)) => (min..=max).contains(&frequency_mhz),
        }
    }

    /// Coarse band of a channel frequency
    pub fn of(frequency_mhz: u32) -> Self {
        if frequency_mhz < BAND_LABEL_SPLIT_MHZ {
            Self::Band2_4GHz
        } else {
            Self::Band5GHz
        }
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Band2_4GHz => write!(f, "2.4 GHz"),
            Self::Band5GHz => write!(f, "5 GHz"),
        }
    }
}

/// Human-oriented signal strength class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalLevel {
    /// Below -90 dBm
    NoSignal,
    /// -90 to -80 dBm
    VeryWeak,
    /// -80 to -70 dBm
    Poor,
    /// -70 to -60 dBm
    Fair,
    /// -60 to -50 dBm
    Good,
    /// -50 dBm and above
    Excellent,
}

impl SignalLevel {
    /// Classify an RSSI value in dBm
    ///
    /// Takes `f64` so interpolated grid cells can be labelled directly.
    pub fn from_rssi(rssi_dbm: f64) -> Self {
        if rssi_dbm >= RSSI_EXCELLENT_DBM as f64 {
            Self::Excellent
        } else if rssi_dbm >= RSSI_GOOD_DBM as f64 {
            Self::Good
        } else if rssi_dbm >= RSSI_FAIR_DBM as f64 {
            Self::Fair
        } else if rssi_dbm >= RSSI_POOR_DBM as f64 {
            Self::Poor
        } else if rssi_dbm >= RSSI_VERY_WEAK_DBM as f64 {
            Self::VeryWeak
        } else {
            Self::NoSignal
        }
    }

    /// Legend label
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::VeryWeak => "Very Weak",
            Self::NoSignal => "No Signal",
        }
    }
}

/// Identity of a network: name plus access point hardware address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkId {
    /// Network name
    pub ssid: String,
    /// Access point MAC address, `aa:bb:cc:dd:ee:ff`
    pub bssid: String,
}

/// One access point as reported by a single scan cycle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawNetworkObservation {
    /// Network name; hidden networks carry a placeholder
    pub ssid: String,
    /// Access point MAC address
    pub bssid: String,
    /// Received signal strength (dBm)
    pub rssi: i32,
    /// Channel centre frequency (MHz)
    pub frequency_mhz: u32,
    /// Security capabilities string, e.g. `[WPA2-PSK-CCMP][ESS]`
    pub capabilities: String,
}

impl RawNetworkObservation {
    /// Build an observation, substituting a placeholder for an empty SSID
    pub fn new(
        ssid: impl Into<String>,
        bssid: impl Into<String>,
        rssi: i32,
        frequency_mhz: u32,
        capabilities: impl Into<String>,
    ) -> Self {
        let mut ssid = ssid.into();
        if ssid.is_empty() {
            ssid = String::from(HIDDEN_NETWORK_SSID);
        }

        Self {
            ssid,
            bssid: bssid.into(),
            rssi,
            frequency_mhz,
            capabilities: capabilities.into(),
        }
    }

    /// Network identity (SSID + BSSID)
    pub fn network_id(&self) -> NetworkId {
        NetworkId {
            ssid: self.ssid.clone(),
            bssid: self.bssid.clone(),
        }
    }

    /// Band this observation was made on
    pub fn band(&self) -> FrequencyBand {
        FrequencyBand::of(self.frequency_mhz)
    }

    /// Signal strength as a coarse percentage (0-100 in steps of 20)
    pub fn signal_percent(&self) -> u8 {
        match self.rssi {
            r if r >= RSSI_EXCELLENT_DBM => 100,
            r if r >= RSSI_GOOD_DBM => 80,
            r if r >= RSSI_FAIR_DBM => 60,
            r if r >= RSSI_POOR_DBM => 40,
            r if r >= RSSI_VERY_WEAK_DBM => 20,
            _ => 0,
        }
    }

    /// Short quality description for scan result lists
    pub fn signal_quality(&self) -> &'static str {
        match self.rssi {
            r if r >= RSSI_EXCELLENT_DBM => "Excellent",
            r if r >= RSSI_GOOD_DBM => "Good",
            r if r >= RSSI_FAIR_DBM => "Fair",
            r if r >= RSSI_POOR_DBM => "Weak",
            _ => "Very Weak",
        }
    }
}

/// Order observations strongest first
///
/// Stable, so access points with equal RSSI keep the radio's order.
pub fn sort_strongest_first(observations: &mut [RawNetworkObservation]) {
    observations.sort_by(|a, b| b.rssi.cmp(&a.rssi));
}

/// Keep only the strongest access point per SSID, strongest first
pub fn strongest_per_ssid(observations: &[RawNetworkObservation]) -> Vec<RawNetworkObservation> {
    let mut best: Vec<RawNetworkObservation> = Vec::new();

    for obs in observations {
        match best.iter_mut().find(|b| b.ssid == obs.ssid) {
            Some(existing) if existing.rssi < obs.rssi => *existing = obs.clone(),
            Some(_) => {}
            None => best.push(obs.clone()),
        }
    }

    sort_strongest_first(&mut best);
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn obs(ssid: &str, bssid: &str, rssi: i32, freq: u32) -> RawNetworkObservation {
        RawNetworkObservation::new(ssid, bssid, rssi, freq, "[WPA2-PSK-CCMP][ESS]")
    }

    #[test]
    fn hidden_network_gets_placeholder() {
        let o = obs("", "aa:bb:cc:dd:ee:ff", -60, 2437);
        assert_eq!(o.ssid, "<Hidden Network>");
    }

    #[test]
    fn band_classification() {
        assert_eq!(obs("a", "b", -50, 2412).band(), FrequencyBand::Band2_4GHz);
        assert_eq!(obs("a", "b", -50, 5180).band(), FrequencyBand::Band5GHz);

        assert!(FrequencyBand::All.contains(60_000));
        assert!(FrequencyBand::Band2_4GHz.contains(2484));
        assert!(!FrequencyBand::Band2_4GHz.contains(5180));
        assert!(FrequencyBand::Band5GHz.contains(5885));
        assert!(!FrequencyBand::Band5GHz.contains(5955));
    }

    #[test]
    fn percent_and_quality_steps() {
        assert_eq!(obs("a", "b", -45, 2412).signal_percent(), 100);
        assert_eq!(obs("a", "b", -60, 2412).signal_percent(), 80);
        assert_eq!(obs("a", "b", -75, 2412).signal_percent(), 40);
        assert_eq!(obs("a", "b", -95, 2412).signal_percent(), 0);

        assert_eq!(obs("a", "b", -50, 2412).signal_quality(), "Excellent");
        assert_eq!(obs("a", "b", -79, 2412).signal_quality(), "Weak");
        assert_eq!(obs("a", "b", -88, 2412).signal_quality(), "Very Weak");
    }

    #[test]
    fn signal_level_boundaries() {
        assert_eq!(SignalLevel::from_rssi(-50.0), SignalLevel::Excellent);
        assert_eq!(SignalLevel::from_rssi(-50.1), SignalLevel::Good);
        assert_eq!(SignalLevel::from_rssi(-90.0), SignalLevel::VeryWeak);
        assert_eq!(SignalLevel::from_rssi(-100.0), SignalLevel::NoSignal);
        assert!(SignalLevel::Excellent > SignalLevel::Poor);
        assert_eq!(SignalLevel::VeryWeak.label(), "Very Weak");
    }

    #[test]
    fn strongest_per_ssid_dedups() {
        let list = vec![
            obs("office", "00:00:00:00:00:01", -70, 2412),
            obs("guest", "00:00:00:00:00:02", -55, 2437),
            obs("office", "00:00:00:00:00:03", -48, 5180),
        ];

        let best = strongest_per_ssid(&list);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].bssid, "00:00:00:00:00:03");
        assert_eq!(best[1].ssid, "guest");
    }
}

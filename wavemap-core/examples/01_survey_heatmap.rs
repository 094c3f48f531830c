//! Survey Heatmap Example
//!
//! Records a short walk through an office, aggregates the readings per
//! position and prints an ASCII coverage map.
//!
//! ## What You'll Learn
//!
//! - Turning scan results into survey logs
//! - Filtering by SSID and band
//! - Reading an interpolated grid
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_survey_heatmap
//! ```

use wavemap_core::{
    heatmap::{HeatmapAssembler, HeatmapSurface, SampleFilter},
    survey::{logs_from_observations, MemorySurveyStore},
    FrequencyBand, RawNetworkObservation, SignalLevel,
};

fn main() {
    println!("Wavemap Survey Heatmap Example");
    println!("==============================\n");

    // (position, 2.4 GHz rssi, 5 GHz rssi)
    let walk = [
        ((8.0, 12.0), -41, -47),
        ((45.0, 15.0), -54, -62),
        ((85.0, 20.0), -66, -77),
        ((20.0, 60.0), -58, -69),
        ((60.0, 55.0), -63, -74),
        ((90.0, 88.0), -79, -91),
    ];

    let mut store = MemorySurveyStore::new();
    for (i, (position, rssi_24, rssi_5)) in walk.into_iter().enumerate() {
        let scan = [
            RawNetworkObservation::new("office", "aa:bb:cc:00:00:01", rssi_24, 2437, "[WPA2][ESS]"),
            RawNetworkObservation::new("office", "aa:bb:cc:00:00:02", rssi_5, 5220, "[WPA2][ESS]"),
        ];
        store.extend(logs_from_observations(position, i as u64 * 30_000, &scan));
        println!("  scan {} at ({:>4.1}, {:>4.1})", i + 1, position.0, position.1);
    }
    println!();

    let assembler = HeatmapAssembler::new(store).with_resolution(40, 20);

    for band in [FrequencyBand::Band2_4GHz, FrequencyBand::Band5GHz] {
        let filter = SampleFilter::all().with_ssid("office").with_band(band);
        let surface = match assembler.assemble(&filter) {
            Ok(surface) => surface,
            Err(never) => match never {},
        };

        match surface {
            HeatmapSurface::NoData { .. } => println!("{}: no data", band),
            HeatmapSurface::Ready { grid, samples, .. } => {
                println!("{} ({} positions)", band, samples.len());
                for j in 0..grid.height() {
                    let row: String = (0..grid.width())
                        .map(|i| shade(grid.get(i, j).unwrap_or(-100.0)))
                        .collect();
                    println!("  |{}|", row);
                }
                if let Some((lo, hi)) = grid.value_range() {
                    println!(
                        "  range {:.1} .. {:.1} dBm ({} .. {})\n",
                        lo,
                        hi,
                        SignalLevel::from_rssi(lo).label(),
                        SignalLevel::from_rssi(hi).label()
                    );
                }
            }
        }
    }
}

fn shade(rssi: f64) -> char {
    match SignalLevel::from_rssi(rssi) {
        SignalLevel::Excellent => '@',
        SignalLevel::Good => '#',
        SignalLevel::Fair => '+',
        SignalLevel::Poor => '-',
        SignalLevel::VeryWeak => '.',
        SignalLevel::NoSignal => ' ',
    }
}

//! Heatmap assembly
//!
//! Glue between stored survey data and the interpolator. A
//! [`SampleSource`] (usually the persistence layer) answers "which samples
//! match this SSID / band filter", and the [`HeatmapAssembler`] turns the
//! answer into a [`HeatmapSurface`] the renderer can draw.
//!
//! ```rust
//! use wavemap_core::heatmap::{HeatmapAssembler, HeatmapSurface, SampleFilter};
//! use wavemap_core::survey::{MemorySurveyStore, SurveyLog};
//! use wavemap_core::{FrequencyBand, RawNetworkObservation};
//!
//! let mut store = MemorySurveyStore::new();
//! let obs = RawNetworkObservation::new("office", "aa:bb:cc:dd:ee:01", -48, 5180, "[ESS]");
//! store.push(SurveyLog::from_observation((25.0, 40.0), 1_000, &obs));
//!
//! let assembler = HeatmapAssembler::new(store).with_resolution(20, 20);
//! let surface = assembler
//!     .assemble(&SampleFilter::all().with_band(FrequencyBand::Band5GHz))
//!     .unwrap();
//! assert!(matches!(surface, HeatmapSurface::Ready { .. }));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::interpolation::{IdwInterpolator, InterpolatedGrid};
use crate::sample::SignalSample;
use crate::signal::FrequencyBand;

/// Which stored observations feed a heatmap
///
/// `ssid: None` means every network.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleFilter {
    /// Restrict to one network name
    pub ssid: Option<String>,
    /// Restrict to one frequency band
    pub band: FrequencyBand,
}

impl SampleFilter {
    /// Every network on every band
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one SSID, keeping the band
    pub fn with_ssid(mut self, ssid: impl Into<String>) -> Self {
        self.ssid = Some(ssid.into());
        self
    }

    /// Drop the SSID restriction, keeping the band
    pub fn any_ssid(mut self) -> Self {
        self.ssid = None;
        self
    }

    /// Restrict to one band, keeping the SSID
    pub fn with_band(mut self, band: FrequencyBand) -> Self {
        self.band = band;
        self
    }

    /// Whether an observation of `ssid` at `frequency_mhz` passes
    pub fn matches(&self, ssid: &str, frequency_mhz: u32) -> bool {
        let ssid_ok = self.ssid.as_deref().map_or(true, |wanted| wanted == ssid);
        ssid_ok && self.band.contains(frequency_mhz)
    }
}

/// Query interface supplied by the persistence layer
pub trait SampleSource {
    /// Error raised by the underlying store
    type Error;

    /// Aggregated samples, one per surveyed position, matching `filter`
    fn heatmap_samples(&self, filter: &SampleFilter) -> Result<Vec<SignalSample>, Self::Error>;

    /// Every SSID present in the survey, sorted
    fn distinct_ssids(&self) -> Result<Vec<String>, Self::Error>;
}

impl<S: SampleSource + ?Sized> SampleSource for &S {
    type Error = S::Error;

    fn heatmap_samples(&self, filter: &SampleFilter) -> Result<Vec<SignalSample>, Self::Error> {
        (**self).heatmap_samples(filter)
    }

    fn distinct_ssids(&self) -> Result<Vec<String>, Self::Error> {
        (**self).distinct_ssids()
    }
}

/// Renderable result of one assembly
#[derive(Debug, Clone, PartialEq)]
pub enum HeatmapSurface {
    /// No stored samples match the filter
    NoData {
        /// Filter that was applied
        filter: SampleFilter,
        /// SSIDs the user could pick instead
        available_ssids: Vec<String>,
    },

    /// Interpolated coverage for the filter
    Ready {
        /// Filter that was applied
        filter: SampleFilter,
        /// Samples the grid was built from, for drawing markers
        samples: Vec<SignalSample>,
        /// Interpolated signal strength
        grid: InterpolatedGrid,
        /// SSIDs the user could pick instead
        available_ssids: Vec<String>,
    },
}

impl HeatmapSurface {
    /// Filter that produced this surface
    pub fn filter(&self) -> &SampleFilter {
        match self {
            Self::NoData { filter, .. } | Self::Ready { filter, .. } => filter,
        }
    }

    /// Grid, if there was data
    pub fn grid(&self) -> Option<&InterpolatedGrid> {
        match self {
            Self::Ready { grid, .. } => Some(grid),
            Self::NoData { .. } => None,
        }
    }
}

/// Builds heatmap surfaces from a sample source
#[derive(Debug, Clone)]
pub struct HeatmapAssembler<S> {
    source: S,
    interpolator: IdwInterpolator,
    grid_width: usize,
    grid_height: usize,
}

impl<S: SampleSource> HeatmapAssembler<S> {
    /// Assembler with the default 100 x 100 grid and power 2
    pub fn new(source: S) -> Self {
        Self {
            source,
            interpolator: IdwInterpolator::default(),
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
        }
    }

    /// Use a different interpolator (power exponent)
    pub fn with_interpolator(mut self, interpolator: IdwInterpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Use a different grid resolution
    ///
    /// # Panics
    ///
    /// If either dimension is below 2.
    pub fn with_resolution(mut self, grid_width: usize, grid_height: usize) -> Self {
        assert!(
            grid_width >= 2 && grid_height >= 2,
            "grid must be at least 2x2, got {}x{}",
            grid_width,
            grid_height
        );
        self.grid_width = grid_width;
        self.grid_height = grid_height;
        self
    }

    /// Underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Query the source with `filter` and interpolate the result
    pub fn assemble(&self, filter: &SampleFilter) -> Result<HeatmapSurface, S::Error> {
        let available_ssids = self.source.distinct_ssids()?;
        let samples = self.source.heatmap_samples(filter)?;

        if samples.is_empty() {
            log_debug!("heatmap: no samples for {:?}", filter);
            return Ok(HeatmapSurface::NoData {
                filter: filter.clone(),
                available_ssids,
            });
        }

        let grid = self
            .interpolator
            .interpolate(&samples, self.grid_width, self.grid_height);
        log_debug!(
            "heatmap: {} samples -> {}x{} grid",
            samples.len(),
            self.grid_width,
            self.grid_height
        );

        Ok(HeatmapSurface::Ready {
            filter: filter.clone(),
            samples,
            grid,
            available_ssids,
        })
    }
}

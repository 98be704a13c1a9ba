//! Library-independent description of the chart: everything a renderer needs
//! to satisfy the visual contract, with no plotting types involved.

use crate::{compare::ComparisonSet, errors::BenchPlotError};

pub const X_AXIS_TITLE: &str = "benchmark";
pub const Y_AXIS_TITLE: &str = "relative to baseline";

/// Baseline parity; the y axis always starts here.
pub const Y_AXIS_MIN: f64 = 1.0;

/// The y axis extends to at least this value even when all bars are short.
const Y_AXIS_MIN_TOP: f64 = 10.0;
const Y_HEADROOM: f64 = 1.05;

/// Fixed qualitative palette (plotly's default colorway); series cycle
/// through it so reference lines and annotations can match their bars.
pub const SERIES_PALETTE: [(u8, u8, u8); 8] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
];

/// One bar series: the relative means and stddevs of a single comparison
/// mode across every benchmark, plus its geometric mean and color.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub mode: String,
    pub color: (u8, u8, u8),
    pub values: Vec<f64>,
    pub errors: Vec<f64>,
    pub geometric_mean: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Benchmark names along the x axis, one group per name.
    pub group_labels: Vec<String>,
    pub series: Vec<BarSeries>,
    pub y_max: f64,
}

impl ChartSpec {
    pub fn from_comparisons(set: &ComparisonSet) -> Result<Self, BenchPlotError> {
        if set.is_empty() {
            return Err(BenchPlotError::empty_comparison("nothing to chart"));
        }
        let group_labels: Vec<String> = set
            .comparisons()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        let modes: Vec<String> = set.modes().iter().map(|m| m.to_string()).collect();
        let mut series = Vec::with_capacity(modes.len());
        let mut y_max = Y_AXIS_MIN_TOP;
        for (idx, mode) in modes.iter().enumerate() {
            let mut values = Vec::with_capacity(set.len());
            let mut errors = Vec::with_capacity(set.len());
            for comparison in set.comparisons() {
                let metric = comparison.for_mode(mode)?;
                y_max = y_max.max(Y_HEADROOM * (metric.relative_mean + metric.relative_std));
                values.push(metric.relative_mean);
                errors.push(metric.relative_std);
            }
            series.push(BarSeries {
                mode: mode.clone(),
                color: SERIES_PALETTE[idx % SERIES_PALETTE.len()],
                values,
                errors,
                geometric_mean: set.geometric_mean(mode)?,
            });
        }
        Ok(Self {
            group_labels,
            series,
            y_max,
        })
    }
}

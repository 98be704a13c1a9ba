//! Loads pyperf benchmark result files, compares a baseline run against one
//! or more candidate runs, and renders relative performance as a grouped bar
//! chart with error bars and geometric-mean reference lines.
//! Run `cargo bench` for the Criterion microbenchmarks.

pub mod chart;
pub mod cli;
pub mod compare;
pub mod errors;
pub mod fixtures;
pub mod render;
pub mod results;
pub mod schema;
pub mod stats;

pub use crate::chart::{BarSeries, ChartSpec};
pub use crate::cli::CommandLineConfig;
pub use crate::compare::{BenchmarkComparison, ComparisonMetric, ComparisonSet};
pub use crate::errors::BenchPlotError;
pub use crate::results::{BenchmarkResult, ResultsSet};

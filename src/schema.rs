//! Wire format of a pyperf result document. Only the fields the pipeline
//! needs are modeled; everything else in the file is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ResultsDoc {
    pub benchmarks: Vec<BenchmarkEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkEntry {
    pub metadata: EntryMetadata,
    pub runs: Vec<BenchmarkRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryMetadata {
    pub name: String,
    pub tags: Vec<String>,
}

/// A single run of a benchmark. Warmup and calibration runs carry no
/// `values` field and contribute nothing to the sample set.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkRun {
    #[serde(default)]
    pub values: Option<Vec<f64>>,
}

impl BenchmarkEntry {
    /// Flattens the measured values of every run that recorded any.
    pub fn flat_values(&self) -> Vec<f64> {
        self.runs
            .iter()
            .filter_map(|run| run.values.as_deref())
            .flatten()
            .copied()
            .collect()
    }
}

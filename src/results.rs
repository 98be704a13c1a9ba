use std::{fs, path::Path};

use ahash::AHashMap;

use crate::{errors::BenchPlotError, schema::ResultsDoc, stats};

/// Aggregated statistics for one benchmark from one result file.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub name: String,
    pub mode: String,
    pub tags: Vec<String>,
    pub mean: f64,
    pub stddev: f64,
}

/// All benchmarks of one result file, in document order, indexed by name.
#[derive(Debug, Clone)]
pub struct ResultsSet {
    mode: String,
    benchmarks: Vec<BenchmarkResult>,
    index: AHashMap<String, usize>,
}

impl ResultsSet {
    /// Loads and aggregates a result file. The mode label is the file stem,
    /// with a residual `.json` stripped when the file was double-suffixed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BenchPlotError> {
        let path = path.as_ref();
        let mode = mode_label(path)?;
        let text = fs::read_to_string(path)
            .map_err(|e| BenchPlotError::input(format!("{}: {e}", path.display())))?;
        let doc: ResultsDoc = serde_json::from_str(&text)
            .map_err(|e| classify_json_error(&format!("{}", path.display()), e))?;
        Self::from_doc(mode, doc)
    }

    pub fn from_json(mode: &str, text: &str) -> Result<Self, BenchPlotError> {
        let doc: ResultsDoc =
            serde_json::from_str(text).map_err(|e| classify_json_error("results document", e))?;
        Self::from_doc(mode.to_string(), doc)
    }

    pub fn from_doc(mode: String, doc: ResultsDoc) -> Result<Self, BenchPlotError> {
        let mut benchmarks = Vec::with_capacity(doc.benchmarks.len());
        let mut index = AHashMap::with_capacity(doc.benchmarks.len());
        for entry in &doc.benchmarks {
            let name = entry.metadata.name.clone();
            let values = entry.flat_values();
            let mean = stats::mean(&values).ok_or_else(|| {
                BenchPlotError::empty_samples(format!("benchmark {name} has no recorded values"))
            })?;
            let stddev = stats::population_stddev(&values).ok_or_else(|| {
                BenchPlotError::empty_samples(format!("benchmark {name} has no recorded values"))
            })?;
            if index.insert(name.clone(), benchmarks.len()).is_some() {
                return Err(BenchPlotError::schema(format!(
                    "duplicate benchmark name {name}"
                )));
            }
            benchmarks.push(BenchmarkResult {
                name,
                mode: mode.clone(),
                tags: entry.metadata.tags.clone(),
                mean,
                stddev,
            });
        }
        Ok(Self {
            mode,
            benchmarks,
            index,
        })
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn benchmarks(&self) -> &[BenchmarkResult] {
        &self.benchmarks
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Looks a benchmark up by name. Absence is an error, never a default.
    pub fn get(&self, name: &str) -> Result<&BenchmarkResult, BenchPlotError> {
        self.index
            .get(name)
            .map(|&idx| &self.benchmarks[idx])
            .ok_or_else(|| {
                BenchPlotError::not_found(format!("benchmark {name} in {} results", self.mode))
            })
    }
}

fn mode_label(path: &Path) -> Result<String, BenchPlotError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.strip_suffix(".json").unwrap_or(stem).to_string())
        .ok_or_else(|| {
            BenchPlotError::input(format!("{}: cannot derive mode label", path.display()))
        })
}

fn classify_json_error(source: &str, err: serde_json::Error) -> BenchPlotError {
    // Structurally wrong documents (missing fields, wrong types) are schema
    // errors; anything else is bad input.
    match err.classify() {
        serde_json::error::Category::Data => {
            BenchPlotError::schema(format!("{source}: {err}"))
        }
        _ => BenchPlotError::input(format!("{source}: {err}")),
    }
}

use crate::{
    errors::BenchPlotError,
    results::{BenchmarkResult, ResultsSet},
    stats,
};

/// Relative performance of one comparison mode against the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMetric {
    pub mode: String,
    /// comparison mean / baseline mean; 1.0 is parity, above 1.0 is slower.
    pub relative_mean: f64,
    /// max(comparison stddev, baseline stddev) / min(comparison mean, baseline mean).
    pub relative_std: f64,
}

/// One baseline benchmark paired against its same-named counterparts.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkComparison {
    pub name: String,
    pub tags: Vec<String>,
    pub metrics: Vec<ComparisonMetric>,
}

impl BenchmarkComparison {
    /// Candidates are matched to the baseline by the caller; this only
    /// derives the metrics. At least one candidate is required.
    pub fn from_benchmarks(
        baseline: &BenchmarkResult,
        candidates: &[&BenchmarkResult],
    ) -> Result<Self, BenchPlotError> {
        if candidates.is_empty() {
            return Err(BenchPlotError::empty_comparison(format!(
                "no candidates for benchmark {}",
                baseline.name
            )));
        }
        let metrics = candidates
            .iter()
            .map(|candidate| ComparisonMetric {
                mode: candidate.mode.clone(),
                relative_mean: candidate.mean / baseline.mean,
                relative_std: candidate.stddev.max(baseline.stddev)
                    / candidate.mean.min(baseline.mean),
            })
            .collect();
        Ok(Self {
            name: baseline.name.clone(),
            tags: baseline.tags.clone(),
            metrics,
        })
    }

    pub fn for_mode(&self, mode: &str) -> Result<&ComparisonMetric, BenchPlotError> {
        self.metrics.iter().find(|m| m.mode == mode).ok_or_else(|| {
            BenchPlotError::not_found(format!("mode {mode} in comparison for {}", self.name))
        })
    }
}

/// All per-benchmark comparisons for one baseline/comparisons pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSet {
    comparisons: Vec<BenchmarkComparison>,
}

impl ComparisonSet {
    /// Pairs every baseline benchmark, minus the excluded names, against the
    /// same name in every comparison set. A name missing from any comparison
    /// set is fatal; so is an empty result after exclusion filtering.
    pub fn from_results(
        baseline: &ResultsSet,
        comparisons: &[ResultsSet],
        excluded: &[String],
    ) -> Result<Self, BenchPlotError> {
        let mut out = Vec::new();
        for bench in baseline.benchmarks() {
            if excluded.iter().any(|name| name == &bench.name) {
                continue;
            }
            let candidates = comparisons
                .iter()
                .map(|set| set.get(&bench.name))
                .collect::<Result<Vec<_>, _>>()?;
            out.push(BenchmarkComparison::from_benchmarks(bench, &candidates)?);
        }
        if out.is_empty() {
            return Err(BenchPlotError::empty_comparison(
                "no benchmarks left after exclusion filtering",
            ));
        }
        Ok(Self { comparisons: out })
    }

    pub fn comparisons(&self) -> &[BenchmarkComparison] {
        &self.comparisons
    }

    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    /// Comparison modes, in the order the metrics were built.
    pub fn modes(&self) -> Vec<&str> {
        self.comparisons
            .first()
            .map(|c| c.metrics.iter().map(|m| m.mode.as_str()).collect())
            .unwrap_or_default()
    }

    /// N-th root of the product of relative means for `mode` across all N
    /// benchmarks in the set.
    pub fn geometric_mean(&self, mode: &str) -> Result<f64, BenchPlotError> {
        let ratios = self
            .comparisons
            .iter()
            .map(|c| c.for_mode(mode).map(|m| m.relative_mean))
            .collect::<Result<Vec<_>, _>>()?;
        stats::geometric_mean(&ratios).ok_or_else(|| {
            BenchPlotError::empty_comparison(format!("geometric mean of {mode} is undefined"))
        })
    }
}

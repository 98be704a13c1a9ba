//! Deterministic synthetic result documents for benchmarks and tests.
//! Same seed, same document.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::{Value, json};

/// Shape of a generated suite.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticSuite {
    pub benchmarks: usize,
    /// Runs per benchmark; the first run is a calibration run without values.
    pub runs: usize,
    pub values_per_run: usize,
}

pub fn generate_doc(suite: &SyntheticSuite, base_secs: f64, seed: u64) -> Value {
    let mut rng = StdRng::seed_from_u64(seed);
    let benchmarks: Vec<Value> = (0..suite.benchmarks)
        .map(|idx| {
            let center = base_secs * (1.0 + idx as f64 / 10.0);
            let runs: Vec<Value> = (0..suite.runs)
                .map(|run| {
                    if run == 0 {
                        json!({ "warmups": [[1, center]] })
                    } else {
                        let values: Vec<f64> = (0..suite.values_per_run)
                            .map(|_| center * rng.gen_range(0.95..1.05))
                            .collect();
                        json!({ "values": values })
                    }
                })
                .collect();
            json!({
                "metadata": { "name": format!("bench_{idx:03}"), "tags": ["synthetic"] },
                "runs": runs,
            })
        })
        .collect();
    json!({ "benchmarks": benchmarks })
}

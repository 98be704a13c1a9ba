use benchplot::{BenchPlotError, ResultsSet};
use serde_json::json;

fn doc(entries: &[(&str, &[f64])]) -> String {
    let benchmarks: Vec<_> = entries
        .iter()
        .map(|(name, values)| {
            json!({
                "metadata": { "name": name, "tags": ["apps"] },
                "runs": [
                    { "warmups": [[1, 0.5]] },
                    { "values": values },
                ],
            })
        })
        .collect();
    json!({ "benchmarks": benchmarks }).to_string()
}

#[test]
fn test_loads_single_benchmark_with_mean_and_stddev() {
    let set = ResultsSet::from_json("baseline", &doc(&[("bench_a", &[10.0, 10.0, 10.0, 10.0])]))
        .expect("results");
    assert_eq!(set.mode(), "baseline");
    assert_eq!(set.len(), 1);
    let result = set.get("bench_a").expect("bench_a");
    assert_eq!(result.mean, 10.0);
    assert_eq!(result.stddev, 0.0);
    assert_eq!(result.tags, vec!["apps".to_string()]);
}

#[test]
fn test_values_flatten_across_runs_and_warmups_are_skipped() {
    let text = json!({
        "benchmarks": [{
            "metadata": { "name": "bench_a", "tags": [] },
            "runs": [
                { "warmups": [[1, 9.9]] },
                { "values": [2.0, 4.0] },
                { "values": [6.0] },
            ],
        }]
    })
    .to_string();
    let set = ResultsSet::from_json("baseline", &text).expect("results");
    let result = set.get("bench_a").expect("bench_a");
    assert!((result.mean - 4.0).abs() < 1e-12);
}

#[test]
fn test_recomputed_mean_matches_within_tolerance() {
    let values = [1.04, 0.97, 1.013, 0.988, 1.002];
    let set = ResultsSet::from_json("baseline", &doc(&[("bench_a", &values)])).expect("results");
    let expected = values.iter().sum::<f64>() / values.len() as f64;
    let result = set.get("bench_a").expect("bench_a");
    assert!((result.mean - expected).abs() < 1e-9);
}

#[test]
fn test_benchmark_without_values_is_an_error() {
    let text = json!({
        "benchmarks": [{
            "metadata": { "name": "bench_a", "tags": [] },
            "runs": [ { "warmups": [[1, 0.5]] } ],
        }]
    })
    .to_string();
    let err = ResultsSet::from_json("baseline", &text).unwrap_err();
    assert!(matches!(err, BenchPlotError::EmptySamples(_)));
    assert!(err.to_string().contains("bench_a"));
}

#[test]
fn test_missing_metadata_name_is_a_schema_error() {
    let text = json!({
        "benchmarks": [{
            "metadata": { "tags": [] },
            "runs": [ { "values": [1.0] } ],
        }]
    })
    .to_string();
    let err = ResultsSet::from_json("baseline", &text).unwrap_err();
    assert!(matches!(err, BenchPlotError::Schema(_)));
}

#[test]
fn test_missing_runs_is_a_schema_error() {
    let text = json!({
        "benchmarks": [{ "metadata": { "name": "bench_a", "tags": [] } }]
    })
    .to_string();
    let err = ResultsSet::from_json("baseline", &text).unwrap_err();
    assert!(matches!(err, BenchPlotError::Schema(_)));
}

#[test]
fn test_invalid_json_is_an_input_error() {
    let err = ResultsSet::from_json("baseline", "{not json").unwrap_err();
    assert!(matches!(err, BenchPlotError::Input(_)));
}

#[test]
fn test_duplicate_benchmark_name_is_a_schema_error() {
    let err = ResultsSet::from_json(
        "baseline",
        &doc(&[("bench_a", &[1.0]), ("bench_a", &[2.0])]),
    )
    .unwrap_err();
    assert!(matches!(err, BenchPlotError::Schema(_)));
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn test_lookup_of_absent_benchmark_is_an_error() {
    let set = ResultsSet::from_json("fast", &doc(&[("bench_a", &[1.0])])).expect("results");
    let err = set.get("bench_b").unwrap_err();
    assert!(matches!(err, BenchPlotError::NotFound(_)));
    assert!(err.to_string().contains("bench_b"));
    assert!(err.to_string().contains("fast"));
}

#[test]
fn test_mode_label_comes_from_file_stem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fast.json");
    std::fs::write(&path, doc(&[("bench_a", &[1.0])])).expect("write");
    let set = ResultsSet::from_file(&path).expect("results");
    assert_eq!(set.mode(), "fast");
}

#[test]
fn test_doubly_suffixed_file_keeps_a_clean_mode_label() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fast.json.json");
    std::fs::write(&path, doc(&[("bench_a", &[1.0])])).expect("write");
    let set = ResultsSet::from_file(&path).expect("results");
    assert_eq!(set.mode(), "fast");
}

#[test]
fn test_missing_file_is_an_input_error_naming_the_path() {
    let err = ResultsSet::from_file("no_such_file.json").unwrap_err();
    assert!(matches!(err, BenchPlotError::Input(_)));
    assert!(err.to_string().contains("no_such_file.json"));
}

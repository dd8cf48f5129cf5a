use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    path.push(format!("confusion_scenarios_{}_{}.json", std::process::id(), id));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_spam_example_counts() {
    let s = spam_example();
    assert_eq!(s.name, "Spam classifier");
    assert_eq!(s.matrix, ConfusionMatrix::new(45, 85, 10, 5).unwrap());
}

#[test]
fn test_comparison_scenarios_order() {
    let names: Vec<_> = comparison_scenarios().into_iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "Balanced model",
            "High precision",
            "High sensitivity",
            "Conservative model"
        ]
    );
    let conservative = &comparison_scenarios()[3];
    assert_eq!(conservative.matrix.total(), 100);
    assert_eq!(conservative.matrix.true_negative(), 60);
}

#[test]
fn test_load_scenarios_file() {
    let path = write_temp(
        r#"[
            {"name": "a", "tp": 1, "tn": 2, "fp": 3, "fn": 4},
            {"name": "b", "tp": 0, "tn": 0, "fp": 0, "fn": 0}
        ]"#,
    );
    let scenarios = load_scenarios(&path).unwrap();
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].name, "a");
    assert_eq!(scenarios[0].matrix.false_negative(), 4);
    assert_eq!(scenarios[1].matrix.total(), 0);
}

#[test]
fn test_negative_scenario_names_entry() {
    let err = parse_scenarios(
        r#"[{"name": "broken", "tp": 1, "tn": -2, "fp": 0, "fn": 0}]"#,
        Path::new("s.json"),
    )
    .unwrap_err();
    match err {
        AppError::InvalidScenario { name, source } => {
            assert_eq!(name, "broken");
            assert!(source.to_string().contains("TN"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_scenario_file_rejected() {
    let err = parse_scenarios("[]", Path::new("empty.json")).unwrap_err();
    assert!(matches!(err, AppError::EmptyScenarioFile(_)));
}

#[test]
fn test_malformed_scenario_file() {
    let err = parse_scenarios(r#"[{"name": "x", "tp": 1}]"#, Path::new("bad.json")).unwrap_err();
    assert!(matches!(err, AppError::ScenarioFile { .. }));
    let err = parse_scenarios(
        r#"[{"name": "x", "tp": 1, "tn": 1, "fp": 1, "fn": 1, "extra": 0}]"#,
        Path::new("bad.json"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_missing_scenario_file_is_io_error() {
    let err = load_scenarios(Path::new("/nonexistent/confusion/scenarios.json")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_demo_scenario_file_loads() {
    let scenarios = load_scenarios(Path::new("demos/scenarios.json")).unwrap();
    assert_eq!(scenarios.len(), 5);
    assert_eq!(scenarios[..4], comparison_scenarios()[..]);
    assert!(!scenarios[4].matrix.precision().is_defined());
}

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("confusion-metrics").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_eval_args() {
    let cli = parse(&["eval", "--tp", "45", "--tn", "85", "--fp", "10", "--fn", "5"]);
    match cli.command {
        Command::Eval(args) => {
            assert_eq!((args.tp, args.tn, args.fp, args.fn_), (45, 85, 10, 5));
            assert_eq!(args.name, "Custom values");
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.strict);
}

#[test]
fn test_parse_negative_reaches_engine() {
    let cli = parse(&["eval", "--tp", "-1", "--tn", "0", "--fp", "0", "--fn", "0"]);
    let err = run(&cli).unwrap_err();
    assert!(matches!(err, AppError::InvalidScenario { .. }));
    assert!(err.to_string().contains("must be non-negative"));
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = parse(&["compare", "--format", "json", "--strict", "--out", "out"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.strict);
    assert_eq!(cli.out, Some(PathBuf::from("out")));
    assert!(matches!(cli.command, Command::Compare { scenarios: None }));
}

#[test]
fn test_missing_count_is_parse_error() {
    let res = Cli::try_parse_from(["confusion-metrics", "eval", "--tp", "1"]);
    assert!(res.is_err());
    let res = Cli::try_parse_from(["confusion-metrics", "eval", "--tp", "x", "--tn", "1", "--fp", "1", "--fn", "1"]);
    assert!(res.is_err());
}

#[test]
fn test_strict_rejects_undefined() {
    let scenarios = vec![Scenario::new("empty", 0, 0, 0, 0).unwrap()];
    let err = check_defined(&scenarios).unwrap_err();
    match err {
        AppError::UndefinedMetric { scenario, metrics } => {
            assert_eq!(scenario, "empty");
            assert_eq!(
                metrics,
                "Sensitivity (Recall), Specificity, Accuracy, Precision, F-score"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(check_defined(&comparison_scenarios()).is_ok());
}

#[test]
fn test_strict_run_fails_on_zero_denominator() {
    let cli = parse(&["eval", "--strict", "--tp", "0", "--tn", "5", "--fp", "0", "--fn", "0"]);
    let err = run(&cli).unwrap_err();
    assert!(err.to_string().contains("Sensitivity (Recall)"));
}

#[test]
fn test_menu_ignored_flags_include_strict() {
    let cli = parse(&["menu", "--strict"]);
    assert_eq!(menu_ignored_flags(&cli), ["--strict"]);
    let cli = parse(&["menu", "--out", "o", "--format", "json", "--strict"]);
    assert_eq!(menu_ignored_flags(&cli), ["--out", "--format", "--strict"]);
    assert!(menu_ignored_flags(&parse(&["menu"])).is_empty());
}

mod error;
mod logging;
mod menu;
mod model;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::AppError;
use crate::model::metrics::Metric;
use crate::model::scenario::{Scenario, comparison_scenarios, load_scenarios, spam_example};
use crate::report::{ReportKind, render_json, render_text, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "confusion-metrics",
    version,
    about = "Binary-classification metrics from a 2x2 confusion matrix"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format for stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write report.txt and summary.json into this directory.
    #[arg(long, global = true, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Fail when any metric has a zero denominator.
    #[arg(long, global = true)]
    strict: bool,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full report for one confusion matrix.
    Eval(EvalArgs),
    /// Full report for the built-in spam classifier example.
    Demo,
    /// Side-by-side summary of several scenarios.
    Compare {
        /// JSON array of {"name", "tp", "tn", "fp", "fn"} objects.
        #[arg(long, value_name = "FILE")]
        scenarios: Option<PathBuf>,
    },
    /// Interactive menu on stdin/stdout.
    Menu,
}

#[derive(Debug, Args)]
struct EvalArgs {
    #[arg(long, allow_negative_numbers = true)]
    tp: i64,
    #[arg(long, allow_negative_numbers = true)]
    tn: i64,
    #[arg(long, allow_negative_numbers = true)]
    fp: i64,
    #[arg(long = "fn", allow_negative_numbers = true)]
    fn_: i64,
    /// Label used in the report heading.
    #[arg(long, default_value = "Custom values")]
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let (scenarios, kind) = match &cli.command {
        Command::Menu => {
            let ignored = menu_ignored_flags(cli);
            if !ignored.is_empty() {
                tracing::warn!(flags = %ignored.join(", "), "flags are ignored in menu mode");
            }
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            menu::run_menu(&mut stdin.lock(), &mut stdout.lock())?;
            return Ok(());
        }
        Command::Eval(args) => (
            vec![Scenario::new(
                args.name.clone(),
                args.tp,
                args.tn,
                args.fp,
                args.fn_,
            )?],
            ReportKind::Full,
        ),
        Command::Demo => (vec![spam_example()], ReportKind::Full),
        Command::Compare { scenarios } => {
            let scenarios = match scenarios {
                Some(path) => load_scenarios(path)?,
                None => comparison_scenarios(),
            };
            (scenarios, ReportKind::Comparison)
        }
    };
    tracing::info!(count = scenarios.len(), ?kind, "evaluating scenarios");

    if cli.strict {
        check_defined(&scenarios)?;
    } else {
        log_undefined(&scenarios);
    }

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&scenarios, kind),
        OutputFormat::Json => render_json(&scenarios)?,
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    if let Some(out_dir) = &cli.out {
        write_reports(&scenarios, kind, out_dir)?;
    }
    Ok(())
}

fn menu_ignored_flags(cli: &Cli) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if cli.out.is_some() {
        flags.push("--out");
    }
    if cli.format != OutputFormat::Text {
        flags.push("--format");
    }
    if cli.strict {
        flags.push("--strict");
    }
    flags
}

fn undefined_names(undefined: &[Metric]) -> String {
    undefined
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_defined(scenarios: &[Scenario]) -> Result<(), AppError> {
    for scenario in scenarios {
        let undefined = scenario.matrix.compute_all().undefined();
        if !undefined.is_empty() {
            return Err(AppError::UndefinedMetric {
                scenario: scenario.name.clone(),
                metrics: undefined_names(&undefined),
            });
        }
    }
    Ok(())
}

fn log_undefined(scenarios: &[Scenario]) {
    for scenario in scenarios {
        let undefined = scenario.matrix.compute_all().undefined();
        if !undefined.is_empty() {
            tracing::warn!(
                scenario = %scenario.name,
                metrics = %undefined_names(&undefined),
                "zero denominator; reporting 0"
            );
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::AppError;
use crate::model::metrics::Ratio;
use crate::model::scenario::Scenario;
use crate::report::json::{build_summary, render_summary_json};
use crate::report::text::{render_comparison_text, render_report_text};

pub const RULE_WIDTH: usize = 70;
pub const SCENARIO_RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decimals {
    /// 4 decimals for the ratio, 2 for the percentage.
    Full,
    /// 3 decimals for the ratio, 1 for the percentage.
    Compact,
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn format_percent_2(v: f64) -> String {
    format!("{:.2}%", v * 100.0)
}

pub fn format_ratio(ratio: Ratio, decimals: Decimals) -> String {
    let mut out = match decimals {
        Decimals::Full => format!(
            "{} ({})",
            format_f64_4(ratio.value()),
            format_percent_2(ratio.value())
        ),
        Decimals::Compact => format!("{:.3} ({:.1}%)", ratio.value(), ratio.percent()),
    };
    if !ratio.is_defined() {
        out.push_str(" [undefined]");
    }
    out
}

pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Matrix, step-by-step calculations, summary and interpretation per scenario.
    Full,
    /// Matrix and compact summary per scenario.
    Comparison,
}

pub fn render_text(scenarios: &[Scenario], kind: ReportKind) -> String {
    match kind {
        ReportKind::Full => scenarios
            .iter()
            .map(render_report_text)
            .collect::<Vec<_>>()
            .join("\n"),
        ReportKind::Comparison => render_comparison_text(scenarios),
    }
}

pub fn render_json(scenarios: &[Scenario]) -> Result<String, AppError> {
    let summary = build_summary(TOOL_NAME, env!("CARGO_PKG_VERSION"), scenarios);
    Ok(render_summary_json(&summary)?)
}

pub const TOOL_NAME: &str = "confusion-metrics";

/// Writes `report.txt` and `summary.json` into `out_dir`, creating it if needed.
pub fn write_reports(
    scenarios: &[Scenario],
    kind: ReportKind,
    out_dir: &Path,
) -> Result<(), AppError> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_text(scenarios, kind))?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_json(scenarios)?)?;

    tracing::info!(out_dir = %out_dir.display(), "wrote report.txt and summary.json");
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

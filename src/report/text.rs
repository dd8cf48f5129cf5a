use std::fmt::Write;

use crate::model::confusion::{COUNT_FIELDS, ConfusionMatrix};
use crate::model::metrics::{Metric, metric_order};
use crate::model::scenario::Scenario;
use crate::report::{
    Decimals, RULE_WIDTH, SCENARIO_RULE_WIDTH, format_f64_4, format_ratio, rule,
};

pub fn render_matrix_table(matrix: &ConfusionMatrix) -> String {
    let mut out = String::new();
    out.push_str("\nCONFUSION MATRIX:\n");
    out.push_str("                    PREDICTED\n");
    out.push_str("                 Pos    Neg\n");
    let _ = writeln!(
        out,
        "ACTUAL  Pos    {:4}   {:4}",
        matrix.true_positive(),
        matrix.false_negative()
    );
    let _ = writeln!(
        out,
        "        Neg    {:4}   {:4}",
        matrix.false_positive(),
        matrix.true_negative()
    );
    out.push('\n');
    for field in COUNT_FIELDS {
        let _ = writeln!(out, "{}: {}", field, matrix.count(field));
    }
    let _ = writeln!(out, "Total (N): {}", matrix.total());
    out
}

fn substitution(matrix: &ConfusionMatrix, metric: Metric) -> String {
    let tp = matrix.true_positive() as u128;
    let tn = matrix.true_negative() as u128;
    let fp = matrix.false_positive() as u128;
    let fn_ = matrix.false_negative() as u128;
    match metric {
        Metric::Sensitivity => format!("{tp} / ({tp} + {fn_}) = {tp} / {}", tp + fn_),
        Metric::Specificity => format!("{tn} / ({fp} + {tn}) = {tn} / {}", fp + tn),
        Metric::Accuracy => format!(
            "({tp} + {tn}) / {n} = {} / {n}",
            tp + tn,
            n = matrix.total()
        ),
        Metric::Precision => format!("{tp} / ({tp} + {fp}) = {tp} / {}", tp + fp),
        Metric::FScore => {
            let p = matrix.precision().value();
            let s = matrix.sensitivity().value();
            format!(
                "2 x ({p4} x {s4}) / ({p4} + {s4})\n   Calculation: 2 x {} / {}",
                format_f64_4(p * s),
                format_f64_4(p + s),
                p4 = format_f64_4(p),
                s4 = format_f64_4(s),
            )
        }
    }
}

pub fn render_detailed_calculations(matrix: &ConfusionMatrix) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule('=', RULE_WIDTH));
    out.push_str("\nDETAILED METRIC CALCULATIONS:\n");
    out.push_str(&rule('=', RULE_WIDTH));
    out.push('\n');

    let all = matrix.compute_all();
    for (idx, metric) in metric_order().iter().enumerate() {
        let heading = match metric {
            Metric::Sensitivity => "SENSITIVITY (Recall)".to_string(),
            other => other.name().to_uppercase(),
        };
        let _ = writeln!(out, "\n{}. {}:", idx + 1, heading);
        let _ = writeln!(out, "   Formula: {}", metric.formula());
        if *metric == Metric::FScore {
            let _ = writeln!(
                out,
                "   Where P = Precision = {} and S = Sensitivity = {}",
                format_f64_4(matrix.precision().value()),
                format_f64_4(matrix.sensitivity().value())
            );
        }
        let _ = writeln!(out, "   Calculation: {}", substitution(matrix, *metric));
        let _ = writeln!(
            out,
            "   Result: {}",
            format_ratio(all.get(*metric), Decimals::Full)
        );
    }
    out
}

pub fn render_summary(matrix: &ConfusionMatrix) -> String {
    let mut out = String::new();
    for (metric, ratio) in matrix.compute_all().iter() {
        let _ = writeln!(
            out,
            "{:25}: {}",
            metric.name(),
            format_ratio(ratio, Decimals::Full)
        );
    }
    out
}

pub fn render_interpretation() -> String {
    let mut out = String::new();
    for metric in metric_order() {
        let _ = writeln!(out, "* {}: {}", metric.name(), metric.description());
    }
    out
}

pub fn render_report_text(scenario: &Scenario) -> String {
    let mut out = String::new();
    out.push_str(&rule('=', RULE_WIDTH));
    let _ = write!(
        out,
        "\nCLASSIFICATION METRICS REPORT: {}\n",
        scenario.name
    );
    out.push_str(&rule('=', RULE_WIDTH));
    out.push('\n');

    out.push_str(&render_matrix_table(&scenario.matrix));
    out.push_str(&render_detailed_calculations(&scenario.matrix));

    out.push('\n');
    out.push_str(&rule('=', RULE_WIDTH));
    out.push_str("\nMETRIC SUMMARY:\n");
    out.push_str(&rule('=', RULE_WIDTH));
    out.push('\n');
    out.push_str(&render_summary(&scenario.matrix));

    out.push('\n');
    out.push_str(&rule('=', RULE_WIDTH));
    out.push_str("\nINTERPRETATION:\n");
    out.push_str(&rule('=', RULE_WIDTH));
    out.push('\n');
    out.push_str(&render_interpretation());
    out
}

pub fn render_comparison_text(scenarios: &[Scenario]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule('=', RULE_WIDTH));
    out.push_str("\nSCENARIO COMPARISON\n");
    out.push_str(&rule('=', RULE_WIDTH));
    out.push('\n');

    for scenario in scenarios {
        let _ = write!(out, "\n{}\n", rule('-', SCENARIO_RULE_WIDTH));
        let _ = writeln!(out, "SCENARIO: {}", scenario.name);
        out.push_str(&rule('-', SCENARIO_RULE_WIDTH));
        out.push('\n');
        out.push_str(&render_matrix_table(&scenario.matrix));
        out.push_str("\nMetric summary:\n");
        for (metric, ratio) in scenario.matrix.compute_all().iter() {
            let _ = writeln!(
                out,
                "  {:20}: {}",
                metric.name(),
                format_ratio(ratio, Decimals::Compact)
            );
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

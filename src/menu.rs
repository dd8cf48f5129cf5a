use std::io::{BufRead, Write};

use crate::model::confusion::ConfusionMatrix;
use crate::model::scenario::{Scenario, comparison_scenarios, spam_example};
use crate::report::text::{render_comparison_text, render_report_text};
use crate::report::{RULE_WIDTH, rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Example,
    Custom,
    Compare,
    Exit,
}

fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Example),
        "2" => Some(MenuChoice::Custom),
        "3" => Some(MenuChoice::Compare),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

enum Prompted {
    Matrix(ConfusionMatrix),
    Rejected,
    Eof,
}

/// Runs the interactive menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<()> {
    loop {
        write_header(out)?;
        write!(out, "\nChoose an option (1-4): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out, "\nInput closed, exiting.")?;
            return Ok(());
        };

        match parse_choice(&line) {
            Some(MenuChoice::Example) => {
                out.write_all(render_report_text(&spam_example()).as_bytes())?;
            }
            Some(MenuChoice::Custom) => match prompt_matrix(input, out)? {
                Prompted::Matrix(matrix) => {
                    let scenario = Scenario::from_matrix("Custom values", matrix);
                    out.write_all(render_report_text(&scenario).as_bytes())?;
                }
                Prompted::Rejected => {}
                Prompted::Eof => {
                    writeln!(out, "\nInput closed, exiting.")?;
                    return Ok(());
                }
            },
            Some(MenuChoice::Compare) => {
                out.write_all(render_comparison_text(&comparison_scenarios()).as_bytes())?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            None => {
                tracing::debug!(choice = line.trim(), "invalid menu choice");
                writeln!(out, "Invalid option! Choose between 1 and 4.")?;
            }
        }
    }
}

fn write_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "CLASSIFICATION METRICS CALCULATOR")?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "1. Automatic example (spam classifier)")?;
    writeln!(out, "2. Enter custom values")?;
    writeln!(out, "3. Compare scenarios")?;
    writeln!(out, "4. Exit")
}

fn prompt_matrix<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<Prompted> {
    writeln!(out, "\n{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "INTERACTIVE MODE - ENTER YOUR OWN VALUES")?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "\nEnter the values of your confusion matrix:")?;

    let labels = [
        "True positives (TP): ",
        "True negatives (TN): ",
        "False positives (FP): ",
        "False negatives (FN): ",
    ];
    let mut counts = [0i64; 4];
    for (slot, label) in counts.iter_mut().zip(labels) {
        write!(out, "{label}")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Prompted::Eof);
        };
        match line.trim().parse::<i64>() {
            Ok(v) => *slot = v,
            Err(_) => {
                writeln!(out, "Error: please enter valid integers only.")?;
                return Ok(Prompted::Rejected);
            }
        }
    }

    let [tp, tn, fp, fn_] = counts;
    match ConfusionMatrix::new(tp, tn, fp, fn_) {
        Ok(matrix) => Ok(Prompted::Matrix(matrix)),
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            Ok(Prompted::Rejected)
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    // Invalid UTF-8 decodes to replacement chars and fails choice/count parsing.
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

#[cfg(test)]
#[path = "../tests/src_inline/menu.rs"]
mod tests;

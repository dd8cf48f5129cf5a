use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::model::confusion::ConfusionMatrix;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub matrix: ConfusionMatrix,
}

/// One entry of a scenario file. Counts stay signed so that negative values
/// are rejected by matrix validation rather than by the JSON decoder.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioEntry {
    name: String,
    tp: i64,
    tn: i64,
    fp: i64,
    #[serde(rename = "fn")]
    fn_: i64,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        tp: i64,
        tn: i64,
        fp: i64,
        fn_: i64,
    ) -> Result<Self, AppError> {
        let name = name.into();
        match ConfusionMatrix::new(tp, tn, fp, fn_) {
            Ok(matrix) => Ok(Self { name, matrix }),
            Err(source) => Err(AppError::InvalidScenario { name, source }),
        }
    }

    pub fn from_matrix(name: impl Into<String>, matrix: ConfusionMatrix) -> Self {
        Self {
            name: name.into(),
            matrix,
        }
    }
}

fn builtin(name: &str, tp: u32, tn: u32, fp: u32, fn_: u32) -> Scenario {
    Scenario::from_matrix(name, ConfusionMatrix::from([tp, tn, fp, fn_]))
}

/// Spam filter: 45 spam caught, 85 legitimate passed, 10 false alarms,
/// 5 spam missed.
pub fn spam_example() -> Scenario {
    builtin("Spam classifier", 45, 85, 10, 5)
}

pub fn comparison_scenarios() -> Vec<Scenario> {
    vec![
        builtin("Balanced model", 40, 40, 10, 10),
        builtin("High precision", 30, 50, 5, 15),
        builtin("High sensitivity", 40, 35, 15, 10),
        builtin("Conservative model", 20, 60, 5, 15),
    ]
}

pub fn parse_scenarios(text: &str, path: &Path) -> Result<Vec<Scenario>, AppError> {
    let entries: Vec<ScenarioEntry> =
        serde_json::from_str(text).map_err(|source| AppError::ScenarioFile {
            path: path.to_path_buf(),
            source,
        })?;
    if entries.is_empty() {
        return Err(AppError::EmptyScenarioFile(path.to_path_buf()));
    }
    entries
        .into_iter()
        .map(|e| Scenario::new(e.name, e.tp, e.tn, e.fp, e.fn_))
        .collect()
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, AppError> {
    let text = std::fs::read_to_string(path)?;
    let scenarios = parse_scenarios(&text, path)?;
    tracing::debug!(
        path = %path.display(),
        count = scenarios.len(),
        "loaded scenario file"
    );
    Ok(scenarios)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scenario.rs"]
mod tests;

use serde::Serialize;

use crate::model::confusion::ConfusionMatrix;
use crate::model::metrics::MetricSet;
use crate::model::scenario::Scenario;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub matrix: &'a ConfusionMatrix,
    pub metrics: MetricSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData<'a> {
    pub tool: &'a str,
    pub version: &'a str,
    pub scenarios: Vec<ScenarioSummary<'a>>,
}

pub fn build_summary<'a>(
    tool: &'a str,
    version: &'a str,
    scenarios: &'a [Scenario],
) -> SummaryData<'a> {
    SummaryData {
        tool,
        version,
        scenarios: scenarios
            .iter()
            .map(|s| ScenarioSummary {
                name: &s.name,
                matrix: &s.matrix,
                metrics: s.matrix.compute_all(),
            })
            .collect(),
    }
}

pub fn render_summary_json(data: &SummaryData<'_>) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;

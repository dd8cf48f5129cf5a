use std::path::PathBuf;

use thiserror::Error;

use crate::model::confusion::MatrixError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario file {path}: {source}")]
    ScenarioFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("scenario file {0} contains no scenarios")]
    EmptyScenarioFile(PathBuf),
    #[error("scenario '{name}': {source}")]
    InvalidScenario {
        name: String,
        #[source]
        source: MatrixError,
    },
    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{scenario}: undefined metrics (zero denominator): {metrics}")]
    UndefinedMetric { scenario: String, metrics: String },
}

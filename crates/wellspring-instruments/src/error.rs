use thiserror::Error;

use crate::validation::ValidationReport;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("invalid submission for '{questionnaire_id}': {report}")]
    InvalidSubmission {
        questionnaire_id: String,
        report: ValidationReport,
    },

    #[error("score {score} is outside the domain of '{questionnaire_id}'")]
    ScoreOutOfDomain { questionnaire_id: String, score: i64 },

    #[error("malformed scoring table for '{questionnaire_id}': {reason}")]
    MalformedScoringTable {
        questionnaire_id: String,
        reason: String,
    },

    #[error("malformed definition for '{questionnaire_id}': {reason}")]
    MalformedDefinition {
        questionnaire_id: String,
        reason: String,
    },

    #[error("questionnaire '{0}' is defined more than once")]
    DuplicateQuestionnaire(String),

    #[error("catalog_version {found} is newer than this build supports ({supported})")]
    UnsupportedCatalogVersion { found: u32, supported: u32 },

    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

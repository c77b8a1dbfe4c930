use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::RecommendationTier;

/// The outcome of scoring one questionnaire submission.
///
/// Produced by the engine and never mutated afterwards. Two evaluations
/// of the same answers with the same `completed_at` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub questionnaire_id: String,
    pub total_score: u32,
    pub severity: String,
    pub description: String,
    pub tier: RecommendationTier,
    /// Copy of the submitted answers, keyed by question id.
    pub answers: BTreeMap<String, i64>,
    pub completed_at: jiff::Timestamp,
}

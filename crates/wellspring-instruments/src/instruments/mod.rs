//! The built-in screening instruments.

pub mod gad7;
pub mod ghq12;
pub mod phq9;

use wellspring_core::models::recommendation::RecommendationTier;

use crate::definition::{AnswerOption, Question, ScoringRange};

/// The "over the last 2 weeks" frequency scale shared by PHQ-9 and GAD-7.
pub(crate) const FREQUENCY: &[(u32, &str)] = &[
    (0, "Not at all"),
    (1, "Several days"),
    (2, "More than half the days"),
    (3, "Nearly every day"),
];

pub(crate) fn question(id: &str, prompt: &str, options: &[(u32, &str)]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|&(value, label)| AnswerOption {
                value,
                label: label.to_string(),
            })
            .collect(),
    }
}

pub(crate) fn range(
    min: u32,
    max: u32,
    severity: &str,
    description: &str,
    tier: RecommendationTier,
) -> ScoringRange {
    ScoringRange {
        min,
        max,
        severity: severity.to_string(),
        description: description.to_string(),
        tier,
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use wellspring_core::models::recommendation::RecommendationTier;

use crate::error::InstrumentError;

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn accepts(&self, value: i64) -> bool {
        self.options.iter().any(|o| i64::from(o.value) == value)
    }

    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

/// An inclusive band of total scores mapped to one severity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRange {
    pub min: u32,
    pub max: u32,
    pub severity: String,
    pub description: String,
    /// Omitted tiers fall back to `Consult`.
    #[serde(default)]
    pub tier: RecommendationTier,
}

impl ScoringRange {
    pub fn contains(&self, score: i64) -> bool {
        i64::from(self.min) <= score && score <= i64::from(self.max)
    }
}

/// A complete questionnaire: questions in display order plus the table
/// that turns a total score into a severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub instructions: String,
    pub questions: Vec<Question>,
    pub scoring_ranges: Vec<ScoringRange>,
}

impl QuestionnaireDefinition {
    /// Sum of every question's highest option value, saturating at
    /// `u32::MAX`. Registry-loaded definitions never saturate.
    pub fn max_possible_score(&self) -> u32 {
        self.checked_max_possible_score().unwrap_or(u32::MAX)
    }

    /// `None` when the highest total does not fit in a `u32`.
    pub fn checked_max_possible_score(&self) -> Option<u32> {
        self.questions
            .iter()
            .map(Question::max_value)
            .try_fold(0u32, u32::checked_add)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Check the structural rules the engine relies on: unique question
    /// ids, non-empty option sets, and a scoring table that partitions
    /// `[0, max_possible_score]` in ascending order.
    pub fn check(&self) -> Result<(), InstrumentError> {
        if self.questions.is_empty() {
            return Err(self.malformed("questionnaire has no questions"));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(self.malformed(format!("duplicate question id '{}'", question.id)));
            }
            if question.options.is_empty() {
                return Err(self.malformed(format!("question '{}' has no options", question.id)));
            }
            let mut values = HashSet::new();
            for option in &question.options {
                if !values.insert(option.value) {
                    return Err(self.malformed(format!(
                        "question '{}' repeats option value {}",
                        question.id, option.value
                    )));
                }
            }
        }

        self.check_scoring_table()
    }

    fn check_scoring_table(&self) -> Result<(), InstrumentError> {
        let Some(max_possible) = self.checked_max_possible_score() else {
            return Err(self.malformed_table("maximum possible score overflows"));
        };
        let Some(last) = self.scoring_ranges.last() else {
            return Err(self.malformed_table("no scoring ranges"));
        };

        // Next score the table has to cover.
        let mut expected = 0u32;
        for range in &self.scoring_ranges {
            if range.min > range.max {
                return Err(self.malformed_table(format!(
                    "range '{}' has min {} above max {}",
                    range.severity, range.min, range.max
                )));
            }
            if range.min != expected {
                let problem = if range.min > expected { "gap" } else { "overlap" };
                return Err(self.malformed_table(format!(
                    "{problem} at score {expected}: range '{}' starts at {}",
                    range.severity, range.min
                )));
            }
            expected = range.max.saturating_add(1);
        }

        if last.max != max_possible {
            return Err(self.malformed_table(format!(
                "ranges end at {} but the maximum possible score is {max_possible}",
                last.max
            )));
        }
        Ok(())
    }

    fn malformed(&self, reason: impl Into<String>) -> InstrumentError {
        InstrumentError::MalformedDefinition {
            questionnaire_id: self.id.clone(),
            reason: reason.into(),
        }
    }

    fn malformed_table(&self, reason: impl Into<String>) -> InstrumentError {
        InstrumentError::MalformedScoringTable {
            questionnaire_id: self.id.clone(),
            reason: reason.into(),
        }
    }
}

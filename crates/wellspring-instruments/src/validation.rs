use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::definition::QuestionnaireDefinition;

/// Caller-supplied answers for one attempt, keyed by question id.
pub type Submission = BTreeMap<String, i64>;

/// An answer whose value is not one of its question's options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvalidAnswer {
    pub question_id: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("unanswered questions: {}", .missing.join(", "))]
    IncompleteSubmission { missing: Vec<String> },

    #[error("answers outside the allowed options: {}", describe(.invalid))]
    InvalidAnswerValue { invalid: Vec<InvalidAnswer> },
}

fn describe(invalid: &[InvalidAnswer]) -> String {
    invalid
        .iter()
        .map(|a| format!("{}={}", a.question_id, a.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every problem found in a submission, collected in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Check a submission against a definition without short-circuiting.
///
/// Missing answers are reported in question order, then out-of-range
/// values in question order. Answers for ids the questionnaire does not
/// define are ignored.
pub fn validate(definition: &QuestionnaireDefinition, answers: &Submission) -> ValidationReport {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();

    for question in &definition.questions {
        match answers.get(&question.id) {
            None => missing.push(question.id.clone()),
            Some(&value) if !question.accepts(value) => invalid.push(InvalidAnswer {
                question_id: question.id.clone(),
                value,
            }),
            Some(_) => {}
        }
    }

    for id in answers.keys() {
        if definition.question(id).is_none() {
            tracing::debug!(
                questionnaire = %definition.id,
                question = %id,
                "ignoring answer for undefined question"
            );
        }
    }

    let mut errors = Vec::new();
    if !missing.is_empty() {
        errors.push(ValidationError::IncompleteSubmission { missing });
    }
    if !invalid.is_empty() {
        errors.push(ValidationError::InvalidAnswerValue { invalid });
    }
    ValidationReport { errors }
}

use tracing::{debug, info, warn};
use wellspring_core::models::result::AssessmentResult;

use crate::catalog;
use crate::definition::{QuestionnaireDefinition, ScoringRange};
use crate::error::InstrumentError;
use crate::validation::{self, Submission, ValidationReport};

/// The read-only set of questionnaires the engine scores against.
///
/// Every definition is checked when the registry is built, so a broken
/// scoring table stops startup instead of producing wrong severities
/// later. After construction nothing is mutated; all operations take
/// `&self` and are safe to call from any number of threads.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<QuestionnaireDefinition>,
}

impl Registry {
    pub fn new(definitions: Vec<QuestionnaireDefinition>) -> Result<Self, InstrumentError> {
        for (i, definition) in definitions.iter().enumerate() {
            if definitions[..i].iter().any(|d| d.id == definition.id) {
                return Err(InstrumentError::DuplicateQuestionnaire(definition.id.clone()));
            }
            definition.check()?;
        }

        info!(
            questionnaires = definitions.len(),
            "questionnaire registry loaded"
        );
        Ok(Self { definitions })
    }

    /// The registry of built-in instruments (PHQ-9, GAD-7, GHQ-12).
    pub fn builtin() -> Result<Self, InstrumentError> {
        Self::new(builtin_definitions())
    }

    /// Built-in instruments plus every questionnaire in a JSON catalog.
    pub fn with_catalog(json: &str) -> Result<Self, InstrumentError> {
        let mut definitions = builtin_definitions();
        definitions.extend(catalog::parse_catalog(json)?);
        Self::new(definitions)
    }

    pub fn definitions(&self) -> &[QuestionnaireDefinition] {
        &self.definitions
    }

    pub fn get(&self, questionnaire_id: &str) -> Result<&QuestionnaireDefinition, InstrumentError> {
        self.definitions
            .iter()
            .find(|d| d.id == questionnaire_id)
            .ok_or_else(|| InstrumentError::UnknownQuestionnaire(questionnaire_id.to_string()))
    }

    /// Collect every problem with a submission. Only an unknown
    /// questionnaire id is an `Err`; answer problems land in the report.
    pub fn validate_answers(
        &self,
        questionnaire_id: &str,
        answers: &Submission,
    ) -> Result<ValidationReport, InstrumentError> {
        let definition = self.get(questionnaire_id)?;
        Ok(validation::validate(definition, answers))
    }

    /// Plain sum of the answers to the questionnaire's questions.
    ///
    /// The submission must be valid; an invalid one is rejected with
    /// `InvalidSubmission` rather than summed partially.
    pub fn score(
        &self,
        questionnaire_id: &str,
        answers: &Submission,
    ) -> Result<u32, InstrumentError> {
        let definition = self.get(questionnaire_id)?;
        let report = validation::validate(definition, answers);
        if !report.is_valid() {
            return Err(InstrumentError::InvalidSubmission {
                questionnaire_id: questionnaire_id.to_string(),
                report,
            });
        }
        Ok(sum(definition, answers))
    }

    /// Find the scoring range containing `total_score`.
    ///
    /// A total above the table resolves to the last range. That can only
    /// happen when the caller passes a score larger than the
    /// questionnaire allows; it is logged and kept as the policy for
    /// degenerate input. Negative totals are rejected.
    pub fn interpret(
        &self,
        questionnaire_id: &str,
        total_score: i64,
    ) -> Result<&ScoringRange, InstrumentError> {
        let definition = self.get(questionnaire_id)?;
        if total_score < 0 {
            return Err(InstrumentError::ScoreOutOfDomain {
                questionnaire_id: questionnaire_id.to_string(),
                score: total_score,
            });
        }

        if let Some(range) = definition.scoring_ranges.iter().find(|r| r.contains(total_score)) {
            return Ok(range);
        }

        match definition.scoring_ranges.last() {
            Some(last) if total_score > i64::from(last.max) => {
                warn!(
                    questionnaire = %questionnaire_id,
                    score = total_score,
                    table_max = last.max,
                    "score above scoring table, using last range"
                );
                Ok(last)
            }
            _ => Err(InstrumentError::MalformedScoringTable {
                questionnaire_id: questionnaire_id.to_string(),
                reason: format!("no range covers score {total_score}"),
            }),
        }
    }

    /// Validate, score, and interpret in one call.
    ///
    /// `completed_at` defaults to the current time; pass it explicitly
    /// for reproducible results.
    pub fn evaluate(
        &self,
        questionnaire_id: &str,
        answers: &Submission,
        completed_at: Option<jiff::Timestamp>,
    ) -> Result<AssessmentResult, InstrumentError> {
        let report = self.validate_answers(questionnaire_id, answers)?;
        if !report.is_valid() {
            warn!(questionnaire = %questionnaire_id, %report, "submission rejected");
            return Err(InstrumentError::InvalidSubmission {
                questionnaire_id: questionnaire_id.to_string(),
                report,
            });
        }

        let definition = self.get(questionnaire_id)?;
        let total_score = sum(definition, answers);
        let range = self.interpret(questionnaire_id, i64::from(total_score))?;

        debug!(
            questionnaire = %questionnaire_id,
            score = total_score,
            severity = %range.severity,
            "assessment evaluated"
        );

        Ok(AssessmentResult {
            questionnaire_id: questionnaire_id.to_string(),
            total_score,
            severity: range.severity.clone(),
            description: range.description.clone(),
            tier: range.tier,
            answers: answers.clone(),
            completed_at: completed_at.unwrap_or_else(jiff::Timestamp::now),
        })
    }
}

fn builtin_definitions() -> Vec<QuestionnaireDefinition> {
    crate::all_instruments()
        .iter()
        .map(|i| i.definition().clone())
        .collect()
}

// Callers have already validated, so every answer is a non-negative
// option value and the total is bounded by the checked maximum.
fn sum(definition: &QuestionnaireDefinition, answers: &Submission) -> u32 {
    definition
        .questions
        .iter()
        .filter_map(|q| answers.get(&q.id))
        .map(|&v| u32::try_from(v).unwrap_or(0))
        .fold(0u32, u32::saturating_add)
}

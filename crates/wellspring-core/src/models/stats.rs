use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::result::AssessmentResult;

/// How many of the latest results the dashboard lists.
pub const RECENT_LIMIT: usize = 10;

/// Aggregate view over stored screening results for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningStats {
    pub total_completions: usize,
    pub by_questionnaire: BTreeMap<String, usize>,
    pub by_severity: BTreeMap<String, usize>,
    /// Mean total score per questionnaire, rounded to one decimal place.
    /// Questionnaires with no results are absent.
    pub average_scores: BTreeMap<String, f64>,
    /// The latest results, oldest first.
    pub recent: Vec<AssessmentResult>,
}

impl ScreeningStats {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a AssessmentResult>,
    {
        let mut by_questionnaire = BTreeMap::new();
        let mut by_severity = BTreeMap::new();
        let mut sums: BTreeMap<String, u64> = BTreeMap::new();
        let mut all: Vec<&AssessmentResult> = Vec::new();

        for result in results {
            *by_questionnaire
                .entry(result.questionnaire_id.clone())
                .or_insert(0) += 1;
            *by_severity.entry(result.severity.clone()).or_insert(0) += 1;
            *sums.entry(result.questionnaire_id.clone()).or_insert(0) +=
                u64::from(result.total_score);
            all.push(result);
        }

        let average_scores = sums
            .into_iter()
            .map(|(id, sum)| {
                let count = by_questionnaire.get(&id).copied().unwrap_or(1) as f64;
                let mean = sum as f64 / count;
                (id, (mean * 10.0).round() / 10.0)
            })
            .collect();

        // Stable sort keeps insertion order for equal timestamps.
        all.sort_by_key(|r| r.completed_at);
        let skip = all.len().saturating_sub(RECENT_LIMIT);
        let recent = all.into_iter().skip(skip).cloned().collect();

        Self {
            total_completions: by_questionnaire.values().sum(),
            by_questionnaire,
            by_severity,
            average_scores,
            recent,
        }
    }
}

use std::sync::LazyLock;

use wellspring_core::models::recommendation::RecommendationTier::*;

use super::{question, range};
use crate::definition::QuestionnaireDefinition;
use crate::Instrument;

/// GHQ-12: General Health Questionnaire, twelve items, Likert 0–3 each.
///
/// Positively worded items ("able to concentrate") and negatively worded
/// items ("lost sleep over worry") use different labels but the same
/// 0–3 direction, so the total is a plain sum. Total 0–36.
pub struct Ghq12;

const POSITIVE: &[(u32, &str)] = &[
    (0, "More so than usual"),
    (1, "Same as usual"),
    (2, "Less so than usual"),
    (3, "Much less than usual"),
];

const NEGATIVE: &[(u32, &str)] = &[
    (0, "Not at all"),
    (1, "No more than usual"),
    (2, "Rather more than usual"),
    (3, "Much more than usual"),
];

const CONCENTRATE: &[(u32, &str)] = &[
    (0, "Better than usual"),
    (1, "Same as usual"),
    (2, "Less than usual"),
    (3, "Much less than usual"),
];

impl Instrument for Ghq12 {
    fn definition(&self) -> &QuestionnaireDefinition {
        static DEFINITION: LazyLock<QuestionnaireDefinition> = LazyLock::new(|| {
            let items: [(&str, &[(u32, &str)]); 12] = [
                ("Have you recently been able to concentrate on whatever you're doing?", CONCENTRATE),
                ("Have you recently lost much sleep over worry?", NEGATIVE),
                ("Have you recently felt that you are playing a useful part in things?", POSITIVE),
                ("Have you recently felt capable of making decisions about things?", POSITIVE),
                ("Have you recently felt constantly under strain?", NEGATIVE),
                ("Have you recently felt that you couldn't overcome your difficulties?", NEGATIVE),
                ("Have you recently been able to enjoy your normal day-to-day activities?", POSITIVE),
                ("Have you recently been able to face up to problems?", POSITIVE),
                ("Have you recently been feeling unhappy and depressed?", NEGATIVE),
                ("Have you recently been losing confidence in yourself?", NEGATIVE),
                ("Have you recently been thinking of yourself as a worthless person?", NEGATIVE),
                ("Have you recently been feeling reasonably happy, all things considered?", POSITIVE),
            ];

            QuestionnaireDefinition {
                id: "ghq".to_string(),
                title: "General Health Questionnaire (GHQ-12)".to_string(),
                description: "A 12-item screening tool for general psychological distress".to_string(),
                instructions: "Please answer the following questions about your general health:".to_string(),
                questions: items
                    .iter()
                    .enumerate()
                    .map(|(i, (prompt, options))| question(&format!("q{}", i + 1), prompt, options))
                    .collect(),
                // "High" runs to the top of the 0–36 domain.
                scoring_ranges: vec![
                    range(0, 3, "Low", "Low psychological distress", Maintain),
                    range(4, 7, "Moderate", "Moderate psychological distress", Consult),
                    range(8, 36, "High", "High psychological distress", Consult),
                ],
            }
        });
        &DEFINITION
    }
}

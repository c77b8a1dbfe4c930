use std::sync::LazyLock;

use wellspring_core::models::recommendation::RecommendationTier::*;

use super::{FREQUENCY, question, range};
use crate::definition::QuestionnaireDefinition;
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale, seven items. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn definition(&self) -> &QuestionnaireDefinition {
        static DEFINITION: LazyLock<QuestionnaireDefinition> = LazyLock::new(|| {
            let prompts = [
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it is hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
            ];

            QuestionnaireDefinition {
                id: "gad7".to_string(),
                title: "Generalized Anxiety Disorder (GAD-7)".to_string(),
                description: "A 7-item screening tool for anxiety severity".to_string(),
                instructions: "Over the last 2 weeks, how often have you been bothered by the following problems?".to_string(),
                questions: prompts
                    .iter()
                    .enumerate()
                    .map(|(i, prompt)| question(&format!("q{}", i + 1), prompt, FREQUENCY))
                    .collect(),
                scoring_ranges: vec![
                    range(0, 4, "Minimal", "Minimal anxiety", Maintain),
                    range(5, 9, "Mild", "Mild anxiety", SelfCare),
                    range(10, 14, "Moderate", "Moderate anxiety", Consult),
                    range(15, 21, "Severe", "Severe anxiety", Urgent),
                ],
            }
        });
        &DEFINITION
    }
}

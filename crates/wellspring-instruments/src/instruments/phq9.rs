use std::sync::LazyLock;

use wellspring_core::models::recommendation::RecommendationTier::*;

use super::{FREQUENCY, question, range};
use crate::definition::QuestionnaireDefinition;
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Depression severity over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn definition(&self) -> &QuestionnaireDefinition {
        static DEFINITION: LazyLock<QuestionnaireDefinition> = LazyLock::new(|| {
            let prompts = [
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things, such as reading the newspaper or watching television",
                "Moving or speaking so slowly that other people could have noticed, or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself in some way",
            ];

            QuestionnaireDefinition {
                id: "phq9".to_string(),
                title: "Patient Health Questionnaire (PHQ-9)".to_string(),
                description: "A 9-item screening tool for depression severity".to_string(),
                instructions: "Over the last 2 weeks, how often have you been bothered by any of the following problems?".to_string(),
                questions: prompts
                    .iter()
                    .enumerate()
                    .map(|(i, prompt)| question(&format!("q{}", i + 1), prompt, FREQUENCY))
                    .collect(),
                scoring_ranges: vec![
                    range(0, 4, "Minimal", "Minimal depression", Maintain),
                    range(5, 9, "Mild", "Mild depression", SelfCare),
                    range(10, 14, "Moderate", "Moderate depression", Consult),
                    range(15, 19, "Moderately Severe", "Moderately severe depression", Seek),
                    range(20, 27, "Severe", "Severe depression", Urgent),
                ],
            }
        });
        &DEFINITION
    }
}

use wellspring_instruments::definition::{
    AnswerOption, Question, QuestionnaireDefinition, ScoringRange,
};
use wellspring_instruments::{InstrumentError, Registry, all_instruments, get_instrument};

fn toy(ranges: &[(u32, u32)]) -> QuestionnaireDefinition {
    let options = vec![
        AnswerOption { value: 0, label: "No".to_string() },
        AnswerOption { value: 2, label: "Yes".to_string() },
    ];
    QuestionnaireDefinition {
        id: "toy".to_string(),
        title: "Toy".to_string(),
        description: String::new(),
        instructions: String::new(),
        questions: vec![
            Question { id: "a".to_string(), prompt: "A?".to_string(), options: options.clone() },
            Question { id: "b".to_string(), prompt: "B?".to_string(), options },
        ],
        scoring_ranges: ranges
            .iter()
            .map(|&(min, max)| ScoringRange {
                min,
                max,
                severity: format!("{min}-{max}"),
                description: String::new(),
                tier: Default::default(),
            })
            .collect(),
    }
}

fn table_error(ranges: &[(u32, u32)]) -> String {
    match Registry::new(vec![toy(ranges)]) {
        Err(InstrumentError::MalformedScoringTable { questionnaire_id, reason }) => {
            assert_eq!(questionnaire_id, "toy");
            reason
        }
        other => panic!("expected MalformedScoringTable, got {other:?}"),
    }
}

#[test]
fn builtin_registry_has_three_instruments() {
    let registry = Registry::builtin().unwrap();
    let ids: Vec<_> = registry.definitions().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["phq9", "gad7", "ghq"]);
}

#[test]
fn builtin_max_scores() {
    let registry = Registry::builtin().unwrap();
    assert_eq!(registry.get("phq9").unwrap().max_possible_score(), 27);
    assert_eq!(registry.get("gad7").unwrap().max_possible_score(), 21);
    assert_eq!(registry.get("ghq").unwrap().max_possible_score(), 36);
}

#[test]
fn instrument_lookup_by_id() {
    assert_eq!(all_instruments().len(), 3);
    let gad7 = get_instrument("gad7").unwrap();
    assert_eq!(gad7.name(), "Generalized Anxiety Disorder (GAD-7)");
    assert_eq!(gad7.definition().questions.len(), 7);
    assert!(get_instrument("phq2").is_none());
}

#[test]
fn non_contiguous_option_values_set_the_domain() {
    // Two questions scored 0 or 2, so the domain is [0, 4].
    let registry = Registry::new(vec![toy(&[(0, 1), (2, 4)])]).unwrap();
    assert_eq!(registry.get("toy").unwrap().max_possible_score(), 4);
}

#[test]
fn table_with_gap_is_rejected() {
    let reason = table_error(&[(0, 1), (3, 4)]);
    assert!(reason.contains("gap at score 2"), "{reason}");
}

#[test]
fn table_with_overlap_is_rejected() {
    let reason = table_error(&[(0, 2), (2, 4)]);
    assert!(reason.contains("overlap"), "{reason}");
}

#[test]
fn table_short_of_max_score_is_rejected() {
    let reason = table_error(&[(0, 1), (2, 3)]);
    assert!(reason.contains("maximum possible score is 4"), "{reason}");
}

#[test]
fn table_not_starting_at_zero_is_rejected() {
    table_error(&[(1, 4)]);
}

#[test]
fn inverted_range_is_rejected() {
    table_error(&[(0, 1), (4, 2)]);
}

#[test]
fn empty_table_is_rejected() {
    table_error(&[]);
}

#[test]
fn duplicate_questionnaire_ids_are_rejected() {
    let def = toy(&[(0, 4)]);
    assert!(matches!(
        Registry::new(vec![def.clone(), def]),
        Err(InstrumentError::DuplicateQuestionnaire(ref id)) if id == "toy"
    ));
}

#[test]
fn duplicate_question_ids_are_rejected() {
    let mut def = toy(&[(0, 4)]);
    def.questions[1].id = "a".to_string();
    assert!(matches!(
        Registry::new(vec![def]),
        Err(InstrumentError::MalformedDefinition { .. })
    ));
}

#[test]
fn question_without_options_is_rejected() {
    let mut def = toy(&[(0, 2)]);
    def.questions[1].options.clear();
    assert!(matches!(
        Registry::new(vec![def]),
        Err(InstrumentError::MalformedDefinition { .. })
    ));
}

#[test]
fn questionnaire_without_questions_is_rejected() {
    let mut def = toy(&[(0, 0)]);
    def.questions.clear();
    assert!(matches!(
        Registry::new(vec![def]),
        Err(InstrumentError::MalformedDefinition { ref reason, .. })
            if reason.contains("no questions")
    ));
}

#[test]
fn duplicate_option_values_are_rejected() {
    let mut def = toy(&[(0, 4)]);
    def.questions[0].options[1].value = 0;
    assert!(matches!(
        Registry::new(vec![def]),
        Err(InstrumentError::MalformedDefinition { ref reason, .. })
            if reason.contains("repeats option value 0")
    ));
}

#[test]
fn overflowing_score_domain_is_rejected() {
    // Two questions topping out at u32::MAX cannot be totalled in a u32.
    let mut def = toy(&[(0, u32::MAX - 1)]);
    for question in &mut def.questions {
        question.options[1].value = u32::MAX;
    }
    assert_eq!(def.checked_max_possible_score(), None);
    assert_eq!(def.max_possible_score(), u32::MAX);

    let reason = match Registry::new(vec![def]) {
        Err(InstrumentError::MalformedScoringTable { reason, .. }) => reason,
        other => panic!("expected MalformedScoringTable, got {other:?}"),
    };
    assert_eq!(reason, "maximum possible score overflows");
}

#[test]
fn score_domain_may_reach_u32_max() {
    let mut def = toy(&[(0, u32::MAX)]);
    def.questions[0].options[1].value = u32::MAX;
    def.questions[1].options[1].value = 0;
    def.questions[1].options.truncate(1);

    let registry = Registry::new(vec![def]).unwrap();
    assert_eq!(registry.get("toy").unwrap().max_possible_score(), u32::MAX);
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(Registry::builtin().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.interpret("phq9", i * 5).unwrap().severity.clone())
        })
        .collect();
    let severities: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(severities, ["Minimal", "Mild", "Moderate", "Moderately Severe"]);
}

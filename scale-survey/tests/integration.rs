//! Integration tests for scale-survey

use scale_survey::{
    BranchRuleDeclaration, CloseNotice, PageInfo, Position, QuestionDeclaration, QuestionId,
    SurveyDeclaration, SurveyEngine, SurveyError, SurveyHost, TestDiagnostics, Warning,
};

fn survey(questions: Vec<QuestionDeclaration>) -> SurveyDeclaration {
    SurveyDeclaration::new(questions)
}

fn visible(engine: &SurveyEngine) -> Vec<String> {
    engine
        .visible_question_ids()
        .iter()
        .map(|id| id.as_str().to_string())
        .collect()
}

#[test]
fn required_answer_unlocks_next_then_survey_runs_to_completion() {
    // One required and one optional question, one per page.
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1").with_required(true),
        QuestionDeclaration::new("q2"),
    ]));

    assert!(!engine.can_advance());
    engine.record_answer("q1", 3);
    assert!(engine.can_advance());

    engine.advance();
    assert_eq!(visible(&engine), vec!["q2"]);
    assert_eq!(engine.progress_fraction(), 0.5);

    engine.advance();
    assert!(engine.completed());
    assert_eq!(engine.progress_fraction(), 1.0);
}

#[test]
fn conditional_jump_skips_intermediate_questions() {
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1").with_logic(BranchRuleDeclaration::conditional("1-2", "q3")),
        QuestionDeclaration::new("q2"),
        QuestionDeclaration::new("q3"),
    ]));

    engine.record_answer("q1", 1);
    engine.advance();

    assert_eq!(visible(&engine), vec!["q3"]);
    assert_eq!(
        engine.position(),
        &Position::Branched {
            question: "q3".into()
        }
    );
}

#[test]
fn unresolvable_target_degrades_to_pagination_with_a_warning() {
    let diagnostics = TestDiagnostics::new();
    let mut engine = SurveyEngine::with_diagnostics(
        &survey(vec![
            QuestionDeclaration::new("q1").with_logic(BranchRuleDeclaration::next("qX")),
            QuestionDeclaration::new("q2"),
        ]),
        Box::new(diagnostics.clone()),
    );

    engine.record_answer("q1", 5);
    engine.advance();

    assert_eq!(visible(&engine), vec!["q2"]);
    assert_eq!(
        diagnostics.warnings(),
        vec![Warning::UnknownBranchTarget {
            question: "q1".into(),
            target: "qX".into(),
        }]
    );
}

#[test]
fn advance_is_not_blocked_by_unmet_requirements() {
    // "Required" only drives the control enablement; a direct advance call
    // proceeds exactly as if the requirement were satisfied.
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1").with_required(true),
        QuestionDeclaration::new("q2"),
    ]));

    assert!(!engine.can_advance());
    engine.advance();
    assert_eq!(visible(&engine), vec!["q2"]);
}

#[test]
fn answers_reflect_the_most_recent_selection_per_question() {
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1"),
        QuestionDeclaration::new("q2"),
    ]));

    engine.record_answer("q1", 1);
    engine.record_answer("q2", 4);
    engine.record_answer("q1", 2);
    engine.record_answer("q1", 5);

    assert_eq!(engine.answers().get(&"q1".into()), Some(5));
    assert_eq!(engine.answers().get(&"q2".into()), Some(4));
    assert_eq!(engine.answers().len(), 2);
}

#[test]
fn progress_never_decreases_within_a_session() {
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1").with_logic(BranchRuleDeclaration::conditional("1-3", "q4")),
        QuestionDeclaration::new("q2"),
        QuestionDeclaration::new("q3"),
        QuestionDeclaration::new("q4"),
        QuestionDeclaration::new("q5"),
    ]));

    engine.record_answer("q1", 2);

    let mut last = engine.progress_fraction();
    for _ in 0..6 {
        engine.advance();
        let progress = engine.progress_fraction();
        assert!(
            progress >= last,
            "progress went backwards: {progress} < {last}"
        );
        last = progress;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn visibility_queries_are_idempotent() {
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1").with_logic(BranchRuleDeclaration::next("q3")),
        QuestionDeclaration::new("q2"),
        QuestionDeclaration::new("q3"),
    ]));

    assert_eq!(engine.visible_question_ids(), engine.visible_question_ids());

    engine.record_answer("q1", 4);
    engine.advance();
    assert_eq!(engine.visible_question_ids(), engine.visible_question_ids());
}

#[test]
fn rule_free_survey_terminates_in_exactly_ceil_n_over_k_steps() {
    let questions: Vec<_> = (1..=5)
        .map(|n| QuestionDeclaration::new(format!("q{n}")))
        .collect();
    let mut engine = SurveyEngine::new(&survey(questions).with_questions_per_page(2));

    // ceil(5 / 2) = 3 pages.
    for step in 1..=3 {
        assert!(!engine.completed(), "completed early at step {step}");
        assert_eq!(engine.advance(), None);
    }
    assert!(engine.completed());

    // One more advance closes instead of navigating further.
    let notice = engine.advance().expect("expected close payload");
    assert!(notice.completed);
}

#[test]
fn earlier_conditional_rule_beats_later_unconditional_rule() {
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1")
            .with_logic(BranchRuleDeclaration::conditional("1-2", "q3"))
            .with_logic(BranchRuleDeclaration::next("q4")),
        QuestionDeclaration::new("q2"),
        QuestionDeclaration::new("q3"),
        QuestionDeclaration::new("q4"),
    ]));

    engine.record_answer("q1", 2);
    engine.advance();

    assert_eq!(visible(&engine), vec!["q3"]);
}

#[test]
fn close_payload_keeps_the_wire_shape() {
    let mut engine = SurveyEngine::new(&survey(vec![QuestionDeclaration::new("q1")]));
    engine.record_answer("q1", 3);
    engine.advance();

    let notice = engine.close();
    assert_eq!(
        serde_json::to_value(&notice).unwrap(),
        serde_json::json!({
            "answers": { "q1": 3 },
            "completed": true,
        })
    );
}

#[test]
fn close_before_completion_reports_partial_answers() {
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1"),
        QuestionDeclaration::new("q2"),
    ]));
    engine.record_answer("q1", 4);

    let notice = engine.close();
    assert!(!notice.completed);
    assert_eq!(notice.answers.get(&"q1".into()), Some(4));
    assert_eq!(notice.answers.len(), 1);
}

#[derive(Debug, Default)]
struct RecordingHost {
    notices: Vec<CloseNotice>,
}

impl SurveyHost for RecordingHost {
    type Error = std::convert::Infallible;

    fn closed(&mut self, notice: &CloseNotice) -> Result<(), Self::Error> {
        self.notices.push(notice.clone());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("host refused the notification")]
struct HostRefused;

struct FailingHost;

impl SurveyHost for FailingHost {
    type Error = HostRefused;

    fn closed(&mut self, _notice: &CloseNotice) -> Result<(), Self::Error> {
        Err(HostRefused)
    }
}

#[test]
fn close_with_delivers_the_notice_to_the_host() {
    let mut engine = SurveyEngine::new(&survey(vec![QuestionDeclaration::new("q1")]));
    engine.record_answer("q1", 2);
    engine.advance();

    let mut host = RecordingHost::default();
    let notice = engine.close_with(&mut host).unwrap();

    assert_eq!(host.notices, vec![notice]);
}

#[test]
fn close_with_surfaces_host_failures() {
    let engine = SurveyEngine::new(&survey(vec![QuestionDeclaration::new("q1")]));

    let result = engine.close_with(&mut FailingHost);
    assert!(matches!(result, Err(SurveyError::Host(_))));
}

#[test]
fn view_reports_one_consistent_snapshot() {
    let mut engine = SurveyEngine::new(&survey(vec![
        QuestionDeclaration::new("q1").with_required(true),
        QuestionDeclaration::new("q2"),
    ]));

    let view = engine.view();
    assert_eq!(view.visible, vec![QuestionId::new("q1")]);
    assert!(!view.can_advance);
    assert_eq!(view.progress, 0.0);
    assert!(!view.completed);
    assert_eq!(
        view.page,
        Some(PageInfo {
            current: 1,
            total: 2
        })
    );

    engine.record_answer("q1", 5);
    engine.advance();
    engine.advance();

    let view = engine.view();
    assert!(view.visible.is_empty());
    assert!(view.can_advance);
    assert_eq!(view.progress, 1.0);
    assert!(view.completed);
    assert_eq!(view.page, None);
}

#[test]
fn declaration_json_round_trip_through_the_engine() {
    let declaration = SurveyDeclaration::from_json(
        r#"{
            "questions-per-page": 1,
            "questions": [
                {
                    "question-id": "nps",
                    "question": "How likely are you to recommend us?",
                    "required": true,
                    "min": 0,
                    "max": 10,
                    "low-score-label": "Not likely",
                    "high-score-label": "Very likely",
                    "logic": [
                        { "type": "conditional", "range": "0-6", "target": "why-low" },
                        { "type": "next", "target": "anything-else" }
                    ]
                },
                { "question-id": "why-low", "question": "What went wrong?" },
                { "question-id": "anything-else", "question": "Anything else?" }
            ]
        }"#,
    )
    .unwrap();

    let mut engine = SurveyEngine::new(&declaration);
    engine.record_answer("nps", 4);
    engine.advance();

    assert_eq!(visible(&engine), vec!["why-low"]);

    engine.advance();
    assert_eq!(visible(&engine), vec!["anything-else"]);

    engine.advance();
    assert!(engine.completed());
}

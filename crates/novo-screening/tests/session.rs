use novo_core::models::category::Category::{Anxiety, Depression, Stress};
use novo_core::models::category::RecommendationTier::Routine;
use novo_core::models::category::RiskTier::Moderate;
use novo_core::models::category::Cohort;
use novo_core::models::question::{Question, QuestionSet};
use novo_core::models::response::OrdinalChoice;
use novo_screening::error::ScreeningError;
use novo_screening::session::{Phase, Session};

fn choice(index: u8) -> OrdinalChoice {
    OrdinalChoice::new(index).unwrap()
}

fn two_question_session() -> Session {
    Session::with_question_set(QuestionSet::new(
        Cohort::Unspecified,
        vec![
            Question::new("q0", vec![Depression]),
            Question::new("q1", vec![Anxiety, Stress]),
        ],
    ))
}

#[test]
fn session_walks_collecting_ready_scored() {
    let mut session = two_question_session();
    assert_eq!(session.phase(), Phase::Collecting);
    assert_eq!(session.progress(), (0, 2));

    session.record(0, choice(0)).unwrap();
    assert_eq!(session.phase(), Phase::Collecting);
    assert_eq!(session.progress(), (1, 2));

    session.record(1, choice(6)).unwrap();
    assert_eq!(session.phase(), Phase::ReadyToScore);

    session.submit().unwrap();
    assert_eq!(session.phase(), Phase::Scored);
}

#[test]
fn submitting_while_collecting_surfaces_counts_and_stays_put() {
    let mut session = two_question_session();
    session.record(0, choice(3)).unwrap();

    match session.submit() {
        Err(ScreeningError::Incomplete { answered, total }) => {
            assert_eq!(answered, 1);
            assert_eq!(total, 2);
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
    assert_eq!(session.phase(), Phase::Collecting);
    assert!(session.outcome().is_none());
    assert_eq!(session.progress(), (1, 2));
}

#[test]
fn end_to_end_two_question_scenario() {
    // Q1 {Depression} answered strongest-agree (+3), Q2 {Anxiety, Stress}
    // answered strongest-disagree (-3).
    let mut session = two_question_session();
    session.record(0, choice(0)).unwrap();
    session.record(1, choice(6)).unwrap();

    let outcome = session.submit().unwrap().clone();
    assert_eq!(outcome.scores.depression, 3);
    assert_eq!(outcome.scores.anxiety, -3);
    assert_eq!(outcome.scores.stress, -3);
    assert_eq!(outcome.report.depression, Moderate);
    assert_eq!(outcome.report.anxiety, Moderate);
    assert_eq!(outcome.report.stress, Moderate);
    assert_eq!(outcome.recommendation, Routine);
}

#[test]
fn recording_after_scored_is_rejected_until_reset() {
    let mut session = two_question_session();
    session.record(0, choice(0)).unwrap();
    session.record(1, choice(0)).unwrap();
    session.submit().unwrap();

    match session.record(0, choice(6)) {
        Err(ScreeningError::SessionScored) => {}
        other => panic!("expected SessionScored, got {other:?}"),
    }

    session.reset();
    session.record(0, choice(6)).unwrap();
}

#[test]
fn reset_clears_answers_and_discards_the_outcome() {
    let mut session = two_question_session();
    session.record(0, choice(0)).unwrap();
    session.record(1, choice(6)).unwrap();
    session.submit().unwrap();
    assert!(session.outcome().is_some());

    session.reset();
    assert_eq!(session.phase(), Phase::Collecting);
    assert!(session.outcome().is_none());
    assert!(session.responses().is_empty());
    assert_eq!(session.progress(), (0, 2));
}

#[test]
fn recording_an_unknown_question_index_is_rejected() {
    let mut session = two_question_session();
    match session.record(2, choice(0)) {
        Err(ScreeningError::UnknownQuestion { index, total }) => {
            assert_eq!(index, 2);
            assert_eq!(total, 2);
        }
        other => panic!("expected UnknownQuestion, got {other:?}"),
    }
}

#[test]
fn bank_backed_session_matches_cohort_length() {
    let session = Session::open(Cohort::Boy);
    assert_eq!(session.progress(), (0, 18));
    assert_eq!(session.question_set().cohort, Cohort::Boy);
}

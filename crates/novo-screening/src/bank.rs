//! The question bank.
//!
//! Static question lists: a common list shown to every respondent plus a
//! cohort-specific extension. Selection is pure — no randomization, no
//! deduplication across variants. A question present in both the common
//! list and an extension is scored twice; that is a property of the
//! source instrument.

use std::sync::LazyLock;

use novo_core::models::category::Category::{self, Anxiety, Depression, Stress};
use novo_core::models::category::Cohort;
use novo_core::models::question::{Question, QuestionSet};

static COMMON: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        q(
            "I often feel anxious about the future, like grades or my career.",
            &[Stress, Anxiety],
        ),
        q(
            "I feel like I'm not good enough, no matter how hard I try.",
            &[Depression, Anxiety],
        ),
        q(
            "I find it hard to focus on schoolwork because of constant worrying or sadness.",
            &[Depression, Anxiety],
        ),
        q(
            "I feel overwhelmed by deadlines, tests, or homework.",
            &[Stress, Anxiety],
        ),
        q(
            "I feel like I have too many responsibilities and not enough time to relax.",
            &[Stress, Depression],
        ),
        q(
            "I've lost interest in things I used to enjoy, like sports or hobbies.",
            &[Depression, Stress],
        ),
        q(
            "I often feel like something bad is about to happen, even when things are okay.",
            &[Anxiety, Depression],
        ),
        q(
            "I feel isolated even when I'm around people.",
            &[Depression, Anxiety],
        ),
        q(
            "I sometimes feel like I don't belong at school or even at home.",
            &[Depression, Anxiety],
        ),
    ]
});

static GIRL: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        q(
            "I feel confused or uncomfortable with the physical changes during puberty.",
            &[Anxiety, Depression],
        ),
        q(
            "I often prefer staying indoors and avoiding going out, even with friends.",
            &[Depression, Anxiety],
        ),
        q(
            "During exams, I struggle to remember things I studied well.",
            &[Stress, Anxiety],
        ),
        q(
            "I feel tired and just want to rest, but there's never enough time.",
            &[Stress, Depression],
        ),
        q(
            "I don't feel like eating much, but I'm okay with just fruits or light snacks.",
            &[Depression, Anxiety],
        ),
        q(
            "Sometimes I question if all this studying and stress is even worth it.",
            &[Depression, Anxiety],
        ),
        q(
            "I feel extra pressure to \"look good\" or act a certain way because I'm a girl.",
            &[Anxiety, Stress],
        ),
        q(
            "I avoid talking to teachers or classmates due to fear of being judged or misunderstood.",
            &[Anxiety, Depression],
        ),
        q(
            "I feel like people expect me to be emotionally strong all the time, even when I'm not okay.",
            &[Depression, Anxiety],
        ),
    ]
});

static BOY: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        q(
            "I feel like I can't show emotions because it's seen as weak.",
            &[Anxiety, Depression],
        ),
        q(
            "I'm expected to be strong or competitive all the time, and it's exhausting.",
            &[Stress, Depression],
        ),
        q(
            "I often hide my stress because I don't want others to think I can't handle things.",
            &[Anxiety, Stress],
        ),
        q(
            "I get angry or frustrated easily, even over small things.",
            &[Stress, Anxiety],
        ),
        q(
            "I avoid asking for help because I think I should figure it out myself.",
            &[Anxiety, Depression],
        ),
        q(
            "I sometimes feel like no one really understands what I'm going through.",
            &[Depression, Anxiety],
        ),
        q(
            "I worry that my performance in school defines my value.",
            &[Stress, Depression],
        ),
        q(
            "I feel pressure to succeed, especially in sports or other 'masculine' areas.",
            &[Anxiety, Stress],
        ),
        q(
            "I act like everything is fine even when I'm struggling inside.",
            &[Depression, Anxiety],
        ),
    ]
});

/// Select the question set for a cohort: the common list, with the
/// cohort's extension appended after it. An unspecified cohort yields the
/// common list alone. Ordering is stable across calls.
pub fn questions_for(cohort: Cohort) -> QuestionSet {
    let mut questions = COMMON.clone();
    match cohort {
        Cohort::Girl => questions.extend(GIRL.iter().cloned()),
        Cohort::Boy => questions.extend(BOY.iter().cloned()),
        Cohort::Unspecified => {}
    }
    QuestionSet::new(cohort, questions)
}

fn q(text: &str, categories: &[Category]) -> Question {
    Question::new(text, categories.to_vec())
}

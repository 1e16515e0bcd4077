use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::{Category, Cohort};

/// A single questionnaire item. Immutable once defined.
///
/// Each question is tagged with one or two categories; its scored value
/// accrues in full to every tagged category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub text: String,
    pub categories: Vec<Category>,
}

impl Question {
    pub fn new(text: impl Into<String>, categories: impl Into<Vec<Category>>) -> Self {
        Self {
            text: text.into(),
            categories: categories.into(),
        }
    }
}

/// The ordered list of questions shown to one respondent: the common list
/// plus an optional cohort-specific extension. Ordering is stable for the
/// life of a session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionSet {
    pub cohort: Cohort,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(cohort: Cohort, questions: Vec<Question>) -> Self {
        Self { cohort, questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

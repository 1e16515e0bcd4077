use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::question::QuestionSet;

/// One position on the 7-point Agree/Disagree scale.
///
/// Index 0 is the strongest-agree end, index 6 the strongest-disagree end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
#[ts(type = "number")]
pub struct OrdinalChoice(u8);

impl OrdinalChoice {
    pub const MAX_INDEX: u8 = 6;

    pub fn new(index: u8) -> Result<Self, CoreError> {
        if index > Self::MAX_INDEX {
            return Err(CoreError::ChoiceOutOfRange(index));
        }
        Ok(Self(index))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for OrdinalChoice {
    type Error = CoreError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<OrdinalChoice> for u8 {
    fn from(choice: OrdinalChoice) -> u8 {
        choice.0
    }
}

/// The respondent's answers so far, keyed by question index.
///
/// The key set grows monotonically during a session: a respondent may
/// change an existing answer, but entries are only removed by `clear`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    answers: BTreeMap<usize, OrdinalChoice>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer to one question.
    pub fn record(&mut self, question: usize, choice: OrdinalChoice) {
        self.answers.insert(question, choice);
    }

    pub fn get(&self, question: usize) -> Option<OrdinalChoice> {
        self.answers.get(&question).copied()
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Complete when every question index in the set has an answer.
    pub fn is_complete_for(&self, set: &QuestionSet) -> bool {
        (0..set.len()).all(|i| self.answers.contains_key(&i))
    }

    /// Explicit reset. The only way entries leave the set.
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Answers in ascending question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, OrdinalChoice)> + '_ {
        self.answers.iter().map(|(&i, &c)| (i, c))
    }
}

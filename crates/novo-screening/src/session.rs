//! Session lifecycle over one pass through the questionnaire.
//!
//! The question set is fixed when the session opens and never reordered.
//! Submission on an incomplete response set surfaces the incompleteness
//! error and leaves the session where it was; only an explicit reset
//! clears answers or discards a computed outcome.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use novo_core::models::category::{Cohort, RecommendationTier};
use novo_core::models::question::QuestionSet;
use novo_core::models::report::{RiskReport, ScoreTable};
use novo_core::models::response::{OrdinalChoice, ResponseSet};

use crate::error::ScreeningError;
use crate::{bank, recommend, risk, scoring};

/// Where a session currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    /// Not every question has an answer yet.
    Collecting,
    /// Every question answered, not yet submitted.
    ReadyToScore,
    /// Submitted; scores and report computed.
    Scored,
}

/// Everything a successful submission computes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Outcome {
    pub scores: ScoreTable,
    pub report: RiskReport,
    pub recommendation: RecommendationTier,
}

/// One respondent's pass through the questionnaire.
#[derive(Debug, Clone)]
pub struct Session {
    question_set: QuestionSet,
    responses: ResponseSet,
    outcome: Option<Outcome>,
}

impl Session {
    /// Open a session over the bank's question set for a cohort.
    pub fn open(cohort: Cohort) -> Self {
        Self::with_question_set(bank::questions_for(cohort))
    }

    /// Open a session over an explicit question set.
    pub fn with_question_set(question_set: QuestionSet) -> Self {
        Self {
            question_set,
            responses: ResponseSet::new(),
            outcome: None,
        }
    }

    pub fn question_set(&self) -> &QuestionSet {
        &self.question_set
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            Phase::Scored
        } else if self.responses.is_complete_for(&self.question_set) {
            Phase::ReadyToScore
        } else {
            Phase::Collecting
        }
    }

    /// `(answered, total)` for the frontend's progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.responses.answered(), self.question_set.len())
    }

    /// Record (or change) the answer to one question. Rejected once the
    /// session is scored; reset first.
    pub fn record(&mut self, question: usize, choice: OrdinalChoice) -> Result<(), ScreeningError> {
        if self.outcome.is_some() {
            return Err(ScreeningError::SessionScored);
        }
        if question >= self.question_set.len() {
            return Err(ScreeningError::UnknownQuestion {
                index: question,
                total: self.question_set.len(),
            });
        }
        self.responses.record(question, choice);
        Ok(())
    }

    /// Submit the questionnaire. On an incomplete response set this
    /// returns [`ScreeningError::Incomplete`] and nothing is scored; on
    /// success the score table, risk report, and recommendation are
    /// computed synchronously and retained until reset.
    pub fn submit(&mut self) -> Result<&Outcome, ScreeningError> {
        let scores = scoring::score(&self.question_set, &self.responses)?;
        let report = risk::classify_all(&scores);
        let recommendation = recommend::recommend(&report);
        Ok(self.outcome.insert(Outcome {
            scores,
            report,
            recommendation,
        }))
    }

    /// Scored artifacts, if the session has been submitted.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Explicit reset: clears every answer, discards the outcome, and
    /// returns the session to collecting.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.outcome = None;
    }
}

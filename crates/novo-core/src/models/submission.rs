use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::Cohort;

/// A completed questionnaire as archived by the storage collaborator.
///
/// Holds the raw per-question ordinal indices in question order; the
/// engine never reads this record back.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub id: Uuid,
    pub respondent_name: String,
    pub cohort: Cohort,
    /// Ordinal index (0..=6) per question, in question order.
    pub responses: Vec<u8>,
    pub submitted_at: jiff::Timestamp,
}

impl Submission {
    pub fn new(respondent_name: impl Into<String>, cohort: Cohort, responses: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            respondent_name: respondent_name.into(),
            cohort,
            responses,
            submitted_at: jiff::Timestamp::now(),
        }
    }
}

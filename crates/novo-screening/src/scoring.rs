use novo_core::models::question::QuestionSet;
use novo_core::models::report::ScoreTable;
use novo_core::models::response::{OrdinalChoice, ResponseSet};

use crate::error::ScreeningError;

/// Signed value for each position on the 7-point scale, strongest-agree
/// end first.
pub const SCALE: [i32; 7] = [3, 2, 1, 0, -1, -2, -3];

pub fn scale_value(choice: OrdinalChoice) -> i32 {
    SCALE[choice.index()]
}

/// Reduce a complete response set into per-category cumulative scores.
///
/// Completeness is checked before any scoring happens; a partial response
/// set yields [`ScreeningError::Incomplete`] with the answered count.
/// Each question's scaled value accrues in full to every category tagged
/// on it — a two-category question contributes to both totals.
pub fn score(set: &QuestionSet, responses: &ResponseSet) -> Result<ScoreTable, ScreeningError> {
    if !responses.is_complete_for(set) {
        return Err(ScreeningError::Incomplete {
            answered: responses.answered(),
            total: set.len(),
        });
    }

    let mut table = ScoreTable::zero();
    for (index, question) in set.iter().enumerate() {
        let choice = responses.get(index).ok_or(ScreeningError::Incomplete {
            answered: responses.answered(),
            total: set.len(),
        })?;
        let value = scale_value(choice);
        for &category in &question.categories {
            table.add(category, value);
        }
    }
    Ok(table)
}

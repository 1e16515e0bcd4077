use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreeningError {
    /// Submission attempted before every question was answered. Recovered
    /// by the frontend into a visible warning; never fatal.
    #[error("questionnaire incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("question index {index} is out of range for a {total}-question set")]
    UnknownQuestion { index: usize, total: usize },

    #[error("session already scored; reset before changing answers")]
    SessionScored,
}

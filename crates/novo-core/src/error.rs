use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("ordinal choice {0} is out of range (expected 0..=6)")]
    ChoiceOutOfRange(u8),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("submission not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("write error for {key}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    #[error("read error for {key}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },
}

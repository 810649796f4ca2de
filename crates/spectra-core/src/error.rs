use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("incomplete response set: missing {0}")]
    IncompleteResponses(String),

    #[error("invalid screening code: {0}")]
    InvalidCode(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}

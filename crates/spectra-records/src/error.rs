use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("screening not found: {id}")]
    NotFound { id: Uuid },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by owner-scoped code lookup. The not-found message
/// deliberately does not distinguish a wrong code from a record owned by
/// someone else.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a valid 6-character screening code")]
    InvalidCode,

    #[error("No screening found with this code, or you do not have permission to view it.")]
    NotFound,
}

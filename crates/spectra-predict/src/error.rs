use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("prediction request failed: {0}")]
    Request(String),

    #[error("prediction service returned status {0}")]
    Status(u16),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client config error: {0}")]
    Config(String),
}

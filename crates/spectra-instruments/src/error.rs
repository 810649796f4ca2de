use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("classification requires a positive screening prediction")]
    NotScreenedPositive,
}

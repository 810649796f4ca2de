use thiserror::Error;

use spectra_instruments::error::InstrumentError;
use spectra_instruments::submission::ValidationError;

#[derive(Debug, Error)]
pub enum FlowError {
    /// The submission is incomplete; nothing was persisted. The messages
    /// are user-facing, in form order.
    #[error("submission validation failed")]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}

use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown question {number} for instrument '{instrument_id}'")]
    UnknownQuestion { instrument_id: String, number: u8 },
}

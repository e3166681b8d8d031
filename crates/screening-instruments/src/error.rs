use thiserror::Error;

use screening_core::error::CoreError;
use screening_core::models::instrument::InstrumentId;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument}: incomplete responses, missing item(s) {missing:?}")]
    IncompleteResponse {
        instrument: InstrumentId,
        missing: Vec<u32>,
    },

    #[error(
        "{instrument}: option {option} is out of range for item {position} ({option_count} options)"
    )]
    InvalidOption {
        instrument: InstrumentId,
        position: u32,
        option: u32,
        option_count: usize,
    },

    #[error("{instrument}: inconsistent score result: {reason}")]
    InconsistentResult {
        instrument: InstrumentId,
        reason: String,
    },

    #[error("{instrument}: no item at position {position}")]
    UnknownItem {
        instrument: InstrumentId,
        position: u32,
    },
}

impl From<CoreError> for InstrumentError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownInstrument(id) => InstrumentError::UnknownInstrument(id),
        }
    }
}

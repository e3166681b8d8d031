//! Scoring against an in-progress [`Session`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use screening_core::models::instrument::InstrumentId;
use screening_core::models::response::ResponseSet;
use screening_core::models::result::ScoreResult;
use screening_core::models::session::Session;

use crate::error::InstrumentError;
use crate::{instrument, summarize};

/// Results for the requested instruments plus their combined summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub results: Vec<ScoreResult>,
    pub summary: String,
}

/// Record an answer after checking the item and option exist.
pub fn record_response(
    session: &mut Session,
    id: InstrumentId,
    position: u32,
    option: u32,
) -> Result<Option<u32>, InstrumentError> {
    let item = instrument(id)
        .item(position)
        .ok_or_else(|| InstrumentError::UnknownItem {
            instrument: id,
            position,
        })?;

    if item.option(option).is_none() {
        return Err(InstrumentError::InvalidOption {
            instrument: id,
            position,
            option,
            option_count: item.options.len(),
        });
    }

    Ok(session.record(id, position, option))
}

/// Score each requested instrument from the session's answers, in the
/// order requested, and render the summary over all of them.
///
/// Fails on the first instrument that is not fully answered; an
/// instrument with no answers at all reports every item as missing.
pub fn evaluate(
    session: &Session,
    instruments: &[InstrumentId],
    with_labels: bool,
) -> Result<Evaluation, InstrumentError> {
    let empty = ResponseSet::new();
    let results = instruments
        .iter()
        .map(|&id| instrument(id).score(session.responses(id).unwrap_or(&empty)))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = summarize(&results, with_labels);

    tracing::info!(
        session_id = %session.id,
        instruments = results.len(),
        "evaluated session"
    );

    Ok(Evaluation { results, summary })
}

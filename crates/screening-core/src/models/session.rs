use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentId;
use super::response::ResponseSet;

/// One assessment interaction.
///
/// Owned by the host: created when an assessment starts, passed into
/// each scoring call and dropped when the assessment ends. Nothing here
/// is shared between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub started_at: jiff::Timestamp,
    #[serde(default)]
    responses: BTreeMap<InstrumentId, ResponseSet>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            responses: BTreeMap::new(),
        }
    }

    /// Store the selected option for one item, replacing any earlier answer.
    pub fn record(&mut self, instrument: InstrumentId, position: u32, option: u32) -> Option<u32> {
        self.responses
            .entry(instrument)
            .or_default()
            .set(position, option)
    }

    pub fn responses(&self, instrument: InstrumentId) -> Option<&ResponseSet> {
        self.responses.get(&instrument)
    }

    /// Discard every answer given for an instrument.
    pub fn clear(&mut self, instrument: InstrumentId) -> Option<ResponseSet> {
        self.responses.remove(&instrument)
    }

    /// Instruments with at least one recorded answer.
    pub fn instruments(&self) -> impl Iterator<Item = InstrumentId> + '_ {
        self.responses
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(&id, _)| id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

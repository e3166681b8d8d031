use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument::InstrumentId;

/// Subtotal for a contiguous group of items (e.g. Y-BOCS obsessions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    pub id: String,
    pub name: String,
    pub score: u32,
}

/// Outcome of scoring one fully answered instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument: InstrumentId,
    pub total: u32,
    /// Empty for instruments without subscales.
    pub subscales: Vec<SubscaleScore>,
    pub severity: String,
    /// Symptom labels of endorsed items, in item order.
    pub symptoms: Vec<String>,
    /// Numeric value of the selected option for each item, in item order.
    pub item_values: Vec<u32>,
}

impl ScoreResult {
    pub fn subscale(&self, id: &str) -> Option<u32> {
        self.subscales.iter().find(|s| s.id == id).map(|s| s.score)
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Selected option index per 1-based item position for one instrument.
///
/// Positions and option indices are not validated here; the instrument
/// definition checks them when the set is scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet(BTreeMap<u32, u32>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the option chosen for an item, returning the previous choice.
    pub fn set(&mut self, position: u32, option: u32) -> Option<u32> {
        self.0.insert(position, option)
    }

    pub fn get(&self, position: u32) -> Option<u32> {
        self.0.get(&position).copied()
    }

    pub fn remove(&mut self, position: u32) -> Option<u32> {
        self.0.remove(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Answered positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    /// `(position, option)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().map(|(&p, &o)| (p, o))
    }
}

impl FromIterator<(u32, u32)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (u32, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(u32, u32); N]> for ResponseSet {
    fn from(pairs: [(u32, u32); N]) -> Self {
        pairs.into_iter().collect()
    }
}

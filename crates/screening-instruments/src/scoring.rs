use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable answer for an item. The option index is its position
/// in the item's option list; `value` is what it contributes to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseOption {
    pub label: &'static str,
    pub value: u32,
}

/// A single question within an instrument.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Item {
    /// 1-based, order-significant.
    pub position: u32,
    pub prompt: &'static str,
    /// Clinical label used in the narrative when the item is endorsed.
    pub symptom: &'static str,
    pub options: &'static [ResponseOption],
}

impl Item {
    pub fn option(&self, index: u32) -> Option<&'static ResponseOption> {
        self.options.get(index as usize)
    }

    /// Option with the given numeric value, if any.
    pub fn option_with_value(&self, value: u32) -> Option<&'static ResponseOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Severity band; `upper` is inclusive, `None` marks the open top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityBand {
    pub upper: Option<u32>,
    pub label: &'static str,
}

/// A contiguous, inclusive range of item positions scored together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subscale {
    pub id: &'static str,
    pub name: &'static str,
    pub first: u32,
    pub last: u32,
}

impl Subscale {
    pub fn contains(&self, position: u32) -> bool {
        (self.first..=self.last).contains(&position)
    }
}

/// Item as presented to a host form: prompt plus option labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemListing {
    pub position: u32,
    pub prompt: String,
    pub option_labels: Vec<String>,
}

impl From<&Item> for ItemListing {
    fn from(item: &Item) -> Self {
        Self {
            position: item.position,
            prompt: item.prompt.to_string(),
            option_labels: item.options.iter().map(|o| o.label.to_string()).collect(),
        }
    }
}

use screening_core::models::instrument::InstrumentId;

use super::frequency_item as item;
use crate::scoring::{Item, SeverityBand};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

static ITEMS: [Item; 7] = [
    item(1, "Feeling nervous, anxious, or on edge", "anxiety"),
    item(
        2,
        "Not being able to stop or control worrying",
        "uncontrollable worry",
    ),
    item(3, "Worrying too much about different things", "excessive worry"),
    item(4, "Trouble relaxing", "difficulty relaxing"),
    item(5, "Being so restless that it's hard to sit still", "restlessness"),
    item(6, "Becoming easily annoyed or irritable", "irritability"),
    item(
        7,
        "Feeling afraid as if something awful might happen",
        "sense of doom",
    ),
];

static BANDS: [SeverityBand; 4] = [
    SeverityBand { upper: Some(4), label: "minimal" },
    SeverityBand { upper: Some(9), label: "mild" },
    SeverityBand { upper: Some(14), label: "moderate" },
    SeverityBand { upper: None, label: "severe" },
];

impl Instrument for Gad7 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gad7
    }

    fn name(&self) -> &'static str {
        "GAD-7"
    }

    fn items(&self) -> &'static [Item] {
        &ITEMS
    }

    fn severity_bands(&self) -> &'static [SeverityBand] {
        &BANDS
    }

    fn domain_adjective(&self) -> &'static str {
        "anxious"
    }

    fn score_label(&self) -> &'static str {
        "GAD7"
    }
}

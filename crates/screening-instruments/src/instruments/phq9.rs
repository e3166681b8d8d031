use screening_core::models::instrument::InstrumentId;

use super::frequency_item as item;
use crate::scoring::{Item, SeverityBand};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub struct Phq9;

static ITEMS: [Item; 9] = [
    item(
        1,
        "Little interest or pleasure in doing things that you normally enjoy",
        "anhedonia",
    ),
    item(2, "Feeling down, depressed, or hopeless", "depressed mood"),
    item(
        3,
        "Trouble falling or staying asleep, sleeping too much",
        "difficulty with sleep",
    ),
    item(4, "Feeling tired or having little energy", "fatigue"),
    item(
        5,
        "Poor appetite or overeating",
        "poor/increased appetite related to mood",
    ),
    item(
        6,
        "Feeling bad about yourself or that you are a failure",
        "low self esteem",
    ),
    item(7, "Trouble concentrating on things", "difficulty concentrating"),
    item(8, "Moving or speaking slowly", "psychomotor slowing"),
    item(
        9,
        "Thoughts that you would be better off dead or of hurting yourself",
        "SI",
    ),
];

static BANDS: [SeverityBand; 5] = [
    SeverityBand { upper: Some(4), label: "minimal" },
    SeverityBand { upper: Some(9), label: "mild" },
    SeverityBand { upper: Some(14), label: "moderate" },
    SeverityBand { upper: Some(19), label: "moderately severe" },
    SeverityBand { upper: None, label: "severe" },
];

impl Instrument for Phq9 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Phq9
    }

    fn name(&self) -> &'static str {
        "PHQ-9"
    }

    fn items(&self) -> &'static [Item] {
        &ITEMS
    }

    fn severity_bands(&self) -> &'static [SeverityBand] {
        &BANDS
    }

    fn domain_adjective(&self) -> &'static str {
        "depressive"
    }

    fn score_label(&self) -> &'static str {
        "PHQ9"
    }
}

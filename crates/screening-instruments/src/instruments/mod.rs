pub mod gad7;
pub mod phq9;
pub mod ybocs;

use crate::scoring::{Item, ResponseOption};

/// Two-week frequency scale shared by PHQ-9 and GAD-7.
pub(crate) const FREQUENCY_OPTIONS: &[ResponseOption] = &[
    ResponseOption {
        label: "Not at all",
        value: 0,
    },
    ResponseOption {
        label: "Several days",
        value: 1,
    },
    ResponseOption {
        label: "More than half the days",
        value: 2,
    },
    ResponseOption {
        label: "Nearly every day",
        value: 3,
    },
];

/// Item answered on the [`FREQUENCY_OPTIONS`] scale.
pub(crate) const fn frequency_item(
    position: u32,
    prompt: &'static str,
    symptom: &'static str,
) -> Item {
    Item {
        position,
        prompt,
        symptom,
        options: FREQUENCY_OPTIONS,
    }
}

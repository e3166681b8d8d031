use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifies one of the supported screening questionnaires.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentId {
    /// Patient Health Questionnaire, depression module.
    Phq9,
    /// Generalized Anxiety Disorder scale.
    Gad7,
    /// Yale-Brown Obsessive Compulsive Scale.
    Ybocs,
}

impl InstrumentId {
    pub const ALL: [InstrumentId; 3] = [InstrumentId::Phq9, InstrumentId::Gad7, InstrumentId::Ybocs];

    /// Short code used in score lines and error messages (e.g. "PHQ9").
    pub fn code(self) -> &'static str {
        match self {
            InstrumentId::Phq9 => "PHQ9",
            InstrumentId::Gad7 => "GAD7",
            InstrumentId::Ybocs => "YBOCS",
        }
    }

    /// Serialized form, as used in URLs and JSON (e.g. "phq9").
    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentId::Phq9 => "phq9",
            InstrumentId::Gad7 => "gad7",
            InstrumentId::Ybocs => "ybocs",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    /// Accepts the serialized form, the short code, and the hyphenated
    /// published names ("PHQ-9", "Y-BOCS"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "phq9" => Ok(InstrumentId::Phq9),
            "gad7" => Ok(InstrumentId::Gad7),
            "ybocs" => Ok(InstrumentId::Ybocs),
            _ => Err(CoreError::UnknownInstrument(s.to_string())),
        }
    }
}

//! screening-instruments
//!
//! Screening questionnaire definitions and scoring. Pure computation, no
//! I/O. Each instrument is a static table of items, option sets, severity
//! bands and subscales; scoring, classification and symptom extraction are
//! shared across instruments through the [`Instrument`] trait.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;
pub mod severity;
pub mod summary;
pub mod symptoms;

use screening_core::models::instrument::InstrumentId;
use screening_core::models::response::ResponseSet;
use screening_core::models::result::{ScoreResult, SubscaleScore};

use error::InstrumentError;
use scoring::{Item, ItemListing, ResponseOption, SeverityBand, Subscale};

pub use summary::{summarize, summarize_verified};

/// Trait implemented by each screening instrument.
///
/// Implementors only supply their tables; everything else is derived.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Published name (e.g., "PHQ-9", "Y-BOCS").
    fn name(&self) -> &'static str;

    /// Items in administration order.
    fn items(&self) -> &'static [Item];

    /// Cutoff table, ascending, ending with an unbounded band.
    fn severity_bands(&self) -> &'static [SeverityBand];

    fn subscales(&self) -> &'static [Subscale] {
        &[]
    }

    /// Adjective used in the narrative ("depressive", "anxious", ...).
    fn domain_adjective(&self) -> &'static str;

    /// Prefix of the total score line in summaries (e.g., "PHQ9").
    fn score_label(&self) -> &'static str;

    fn item(&self, position: u32) -> Option<&'static Item> {
        self.items().iter().find(|i| i.position == position)
    }

    /// Highest total the instrument can produce.
    fn max_score(&self) -> u32 {
        self.items()
            .iter()
            .map(|i| i.options.iter().map(|o| o.value).max().unwrap_or(0))
            .sum()
    }

    fn list_items(&self) -> Vec<ItemListing> {
        self.items().iter().map(ItemListing::from).collect()
    }

    fn list_option_values(&self, position: u32) -> Result<&'static [ResponseOption], InstrumentError> {
        self.item(position)
            .map(|i| i.options)
            .ok_or_else(|| InstrumentError::UnknownItem {
                instrument: self.id(),
                position,
            })
    }

    fn classify(&self, total: u32) -> &'static str {
        severity::classify(total, self.severity_bands())
    }

    /// Check that `responses` answers every item with an in-range option and
    /// nothing else, returning the selected values in item order.
    fn validate_responses(&self, responses: &ResponseSet) -> Result<Vec<u32>, InstrumentError> {
        if let Some(position) = responses.positions().find(|&p| self.item(p).is_none()) {
            return Err(InstrumentError::UnknownItem {
                instrument: self.id(),
                position,
            });
        }

        let missing: Vec<u32> = self
            .items()
            .iter()
            .map(|i| i.position)
            .filter(|&p| responses.get(p).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(InstrumentError::IncompleteResponse {
                instrument: self.id(),
                missing,
            });
        }

        self.items()
            .iter()
            .map(|item| {
                let option = responses.get(item.position).unwrap_or_default();
                item.option(option)
                    .map(|o| o.value)
                    .ok_or_else(|| InstrumentError::InvalidOption {
                        instrument: self.id(),
                        position: item.position,
                        option,
                        option_count: item.options.len(),
                    })
            })
            .collect()
    }

    /// Score a complete response set.
    fn score(&self, responses: &ResponseSet) -> Result<ScoreResult, InstrumentError> {
        let values = self.validate_responses(responses)?;
        let items = self.items();

        let total: u32 = values.iter().sum();
        let subscales = self
            .subscales()
            .iter()
            .map(|subscale| SubscaleScore {
                id: subscale.id.to_string(),
                name: subscale.name.to_string(),
                score: items
                    .iter()
                    .zip(&values)
                    .filter(|(item, _)| subscale.contains(item.position))
                    .map(|(_, v)| v)
                    .sum(),
            })
            .collect();
        let severity = self.classify(total);
        let symptoms = symptoms::extract(items.iter().map(|i| i.symptom).zip(values.iter().copied()));

        tracing::debug!(
            instrument = %self.id(),
            total,
            severity,
            endorsed = symptoms.len(),
            "scored instrument"
        );

        Ok(ScoreResult {
            instrument: self.id(),
            total,
            subscales,
            severity: severity.to_string(),
            symptoms,
            item_values: values,
        })
    }

    /// Check that `result` is exactly what scoring its own item values on
    /// this instrument produces. Results that arrive from outside the
    /// process (e.g. deserialized JSON) must pass this before rendering.
    fn verify_result(&self, result: &ScoreResult) -> Result<(), InstrumentError> {
        let inconsistent = |reason: String| InstrumentError::InconsistentResult {
            instrument: result.instrument,
            reason,
        };

        if result.instrument != self.id() {
            return Err(inconsistent(format!("expected a {} result", self.id())));
        }

        let items = self.items();
        if result.item_values.len() != items.len() {
            return Err(inconsistent(format!(
                "{} item values for {} items",
                result.item_values.len(),
                items.len()
            )));
        }

        let responses: ResponseSet = items
            .iter()
            .zip(&result.item_values)
            .map(|(item, &value)| {
                item.options
                    .iter()
                    .position(|o| o.value == value)
                    .map(|index| (item.position, index as u32))
                    .ok_or_else(|| {
                        inconsistent(format!("item {} has no option valued {value}", item.position))
                    })
            })
            .collect::<Result<_, _>>()?;
        let expected = self.score(&responses)?;

        if result.total != expected.total {
            return Err(inconsistent(format!(
                "total {} but item values sum to {}",
                result.total, expected.total
            )));
        }
        if result.subscales != expected.subscales {
            return Err(inconsistent("subscale subtotals do not match item values".to_string()));
        }
        if result.severity != expected.severity {
            return Err(inconsistent(format!(
                "severity '{}' but total {} is '{}'",
                result.severity, expected.total, expected.severity
            )));
        }
        if result.symptoms != expected.symptoms {
            return Err(inconsistent("symptoms do not match endorsed items".to_string()));
        }
        Ok(())
    }

    /// Format a result as plain text for inclusion in a clinical note:
    /// each item's prompt with the chosen answer, then subtotals and total.
    fn to_structured_input(&self, result: &ScoreResult) -> Result<String, InstrumentError> {
        self.verify_result(result)?;

        let mut output = format!("## {}\n\n", self.name());
        for (item, &value) in self.items().iter().zip(&result.item_values) {
            let answer = item.option_with_value(value).map_or("", |o| o.label);
            output.push_str(&format!(
                "{}. {}: {} ({})\n",
                item.position, item.prompt, answer, value
            ));
        }
        output.push('\n');
        for subscale in &result.subscales {
            output.push_str(&format!("- {}: {}\n", subscale.name, subscale.score));
        }
        output.push_str(&format!(
            "- Total: {} of {} ({})\n",
            result.total,
            self.max_score(),
            result.severity
        ));
        Ok(output)
    }
}

/// Definition for an instrument identifier.
pub fn instrument(id: InstrumentId) -> &'static dyn Instrument {
    match id {
        InstrumentId::Phq9 => &instruments::phq9::Phq9,
        InstrumentId::Gad7 => &instruments::gad7::Gad7,
        InstrumentId::Ybocs => &instruments::ybocs::Ybocs,
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    InstrumentId::ALL.into_iter().map(instrument).collect()
}

/// Look up an instrument by its textual identifier.
pub fn get_instrument(id: &str) -> Result<&'static dyn Instrument, InstrumentError> {
    Ok(instrument(id.parse()?))
}

/// Score a response set for the given instrument.
pub fn score(id: InstrumentId, responses: &ResponseSet) -> Result<ScoreResult, InstrumentError> {
    instrument(id).score(responses)
}

/// Severity label for a total on a named instrument.
pub fn severity_for(id: &str, total: u32) -> Result<&'static str, InstrumentError> {
    Ok(get_instrument(id)?.classify(total))
}

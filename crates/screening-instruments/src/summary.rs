//! Narrative summary text.
//!
//! Output depends only on the results passed in, so identical results
//! always render identical bytes.

use screening_core::models::result::ScoreResult;

use crate::error::InstrumentError;
use crate::instrument;

/// Phrase used in place of an empty symptom list.
pub const NO_SYMPTOMS: &str = "no specific symptoms";

/// Join symptom labels as an English list ("a, b, and c").
pub fn join_symptoms<S: AsRef<str>>(symptoms: &[S]) -> String {
    if symptoms.is_empty() {
        return NO_SYMPTOMS.to_string();
    }
    join_series(symptoms)
}

/// Serial-comma join: "a", "a and b", "a, b, and c". Empty input gives "".
fn join_series<S: AsRef<str>>(parts: &[S]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Score lines for one result: the total, then any subscale subtotals.
fn score_lines(result: &ScoreResult) -> Vec<String> {
    let definition = instrument(result.instrument);
    let mut lines = vec![format!("{}: {}", definition.score_label(), result.total)];

    if !result.subscales.is_empty() {
        let subtotals: Vec<String> = result
            .subscales
            .iter()
            .map(|s| format!("{}: {}", s.name, s.score))
            .collect();
        lines.push(subtotals.join(", "));
    }
    lines
}

fn clause(result: &ScoreResult) -> String {
    let definition = instrument(result.instrument);
    format!(
        "{} {} symptoms of {}",
        result.severity,
        definition.domain_adjective(),
        join_symptoms(&result.symptoms)
    )
}

/// Render the clinician-facing summary for one or more scored instruments.
///
/// With `with_labels`, every result contributes its score line(s) first,
/// in the order given. The final line is a single "Patient endorses ..."
/// sentence with one clause per result. No results yields an empty string.
pub fn summarize(results: &[ScoreResult], with_labels: bool) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();
    if with_labels {
        lines.extend(results.iter().flat_map(score_lines));
    }

    let clauses: Vec<String> = results.iter().map(clause).collect();
    lines.push(format!("Patient endorses {}.", join_series(&clauses)));

    lines.join("\n")
}

/// [`summarize`] for results that did not come straight from scoring.
///
/// Every result is checked against its instrument definition first, so a
/// result whose totals, subtotals, severity or symptoms disagree with its
/// item values is rejected instead of rendered.
pub fn summarize_verified(
    results: &[ScoreResult],
    with_labels: bool,
) -> Result<String, InstrumentError> {
    for result in results {
        instrument(result.instrument).verify_result(result)?;
    }
    Ok(summarize(results, with_labels))
}

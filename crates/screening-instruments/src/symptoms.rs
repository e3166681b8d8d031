/// Lowest response value at which an item counts as endorsed.
pub const ENDORSEMENT_THRESHOLD: u32 = 1;

/// Symptom labels of endorsed items, in the order given.
///
/// Repeated labels are kept as they appear.
pub fn extract<'a, I>(scored: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    scored
        .into_iter()
        .filter(|&(_, value)| value >= ENDORSEMENT_THRESHOLD)
        .map(|(symptom, _)| symptom.to_string())
        .collect()
}

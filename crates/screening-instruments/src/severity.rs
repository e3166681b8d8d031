use crate::scoring::SeverityBand;

/// Map a total score onto a cutoff table.
///
/// Bands are scanned in ascending order and the first one whose inclusive
/// upper bound admits the score wins. Scores past every bounded band land
/// in the final band.
pub fn classify(score: u32, bands: &[SeverityBand]) -> &'static str {
    bands
        .iter()
        .find(|band| band.upper.is_none_or(|upper| score <= upper))
        .or(bands.last())
        .map_or("", |band| band.label)
}

pub mod health;
pub mod instruments;
pub mod sessions;
pub mod summary;

/// Summaries include score lines unless the caller opts out.
fn default_with_labels() -> bool {
    true
}

//! screening-core
//!
//! Shared vocabulary of the screening system: instrument identifiers,
//! response sets, score results and the per-assessment session object.
//! No scoring logic lives here.

pub mod error;
pub mod models;

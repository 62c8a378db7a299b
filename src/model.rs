//! Core data model: action entries, the daily log, and the persisted state.

mod entry;
mod state;

pub use entry::{ActionEntry, total_points};
pub use state::LedgerState;

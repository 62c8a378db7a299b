//! Action entries: one recorded instance of an activity.

use serde::{Deserialize, Serialize};

/// A single recorded action with its quantity and derived points.
///
/// Field names are part of the state file format: the quantity is stored
/// as `qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    /// Activity category (e.g. "Sport").
    pub name: String,

    /// User-supplied unit count: minutes, repetitions, etc.
    #[serde(rename = "qty")]
    pub quantity: u64,

    /// Points earned, derived from the quantity by [`points_for`].
    pub points: u64,
}

impl ActionEntry {
    /// Builds an entry, deriving its points from the quantity.
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
            points: points_for(quantity),
        }
    }
}

/// The points rule: one point per unit.
pub fn points_for(quantity: u64) -> u64 {
    quantity
}

/// Sums the points of a day's entries, or `None` if the sum overflows.
pub fn checked_total_points(entries: &[ActionEntry]) -> Option<u64> {
    entries.iter().try_fold(0u64, |sum, e| sum.checked_add(e.points))
}

/// Sums the points of a day's entries.
///
/// Loading and recording both keep every day's total within `u64`, so the
/// saturation only guards hand-built states.
pub fn total_points(entries: &[ActionEntry]) -> u64 {
    entries
        .iter()
        .fold(0u64, |sum, e| sum.saturating_add(e.points))
}

//! The aggregate root: everything persisted between runs.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::entry::{ActionEntry, checked_total_points, total_points};

/// Entries per calendar date, in creation order within each date.
///
/// A date is only ever present with at least one entry.
pub type DailyLog = BTreeMap<Date, Vec<ActionEntry>>;

/// The full persisted state.
///
/// Serialized as `{ "actions": [], "log": { ... }, "streak": n }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Carried for file-format compatibility. Never populated or read.
    #[serde(default)]
    pub actions: Vec<serde_json::Value>,

    #[serde(rename = "log")]
    pub daily_log: DailyLog,

    /// Incremented once per recorded action, whatever the date.
    pub streak: u64,
}

impl LedgerState {
    /// Entries recorded on `date`, empty if none.
    pub fn entries_on(&self, date: Date) -> &[ActionEntry] {
        self.daily_log.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Total points recorded on `date`.
    pub fn points_on(&self, date: Date) -> u64 {
        total_points(self.entries_on(date))
    }

    /// The first date whose entry list is empty, if any.
    pub fn first_empty_day(&self) -> Option<Date> {
        self.daily_log
            .iter()
            .find(|(_, entries)| entries.is_empty())
            .map(|(date, _)| *date)
    }

    /// The first date whose points total doesn't fit in a `u64`, if any.
    pub fn first_overflowing_day(&self) -> Option<Date> {
        self.daily_log
            .iter()
            .find(|(_, entries)| checked_total_points(entries).is_none())
            .map(|(date, _)| *date)
    }
}

//! Derived views over the ledger state.

use jiff::civil::Date;

use crate::model::{LedgerState, total_points};

/// One `(date, points)` pair per recorded date, in ascending date order.
///
/// Empty when nothing has been recorded yet.
pub fn daily_totals(state: &LedgerState) -> Vec<(Date, u64)> {
    state
        .daily_log
        .iter()
        .map(|(date, entries)| (*date, total_points(entries)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::ActionEntry;

    #[test]
    fn empty_state_has_no_totals() {
        assert!(daily_totals(&LedgerState::default()).is_empty());
    }

    #[test]
    fn totals_are_sorted_by_date_not_insertion() {
        let mut state = LedgerState::default();
        state
            .daily_log
            .insert(date(2024, 1, 2), vec![ActionEntry::new("Sport", 5)]);
        state
            .daily_log
            .insert(date(2024, 1, 1), vec![ActionEntry::new("Étude", 3)]);

        assert_eq!(
            daily_totals(&state),
            [(date(2024, 1, 1), 3), (date(2024, 1, 2), 5)]
        );
    }

    #[test]
    fn totals_sum_each_day() {
        let mut state = LedgerState::default();
        state.daily_log.insert(
            date(2023, 12, 31),
            vec![
                ActionEntry::new("Sport", 20),
                ActionEntry::new("Travail", 90),
                ActionEntry::new("Projet perso", 15),
            ],
        );
        state
            .daily_log
            .insert(date(2024, 1, 1), vec![ActionEntry::new("Sport", 0)]);

        assert_eq!(
            daily_totals(&state),
            [(date(2023, 12, 31), 125), (date(2024, 1, 1), 0)]
        );
    }

    #[test]
    fn totals_do_not_touch_state() {
        let mut state = LedgerState::default();
        state
            .daily_log
            .insert(date(2024, 1, 1), vec![ActionEntry::new("Sport", 7)]);
        state.streak = 1;
        let before = state.clone();

        let _totals = daily_totals(&state);

        assert_eq!(state, before);
    }
}

//! Phrase of the day.

use jiff::civil::Date;

const PHRASES: [&str; 3] = [
    "La discipline précède la motivation.",
    "Petits efforts chaque jour, grands résultats sur le long terme.",
    "Agir est plus important que penser.",
];

/// The phrase for `date`. Stable for a given day, rotates day to day.
pub fn phrase_for(date: Date) -> &'static str {
    let index = usize::try_from(date.day_of_year()).unwrap_or(0) % PHRASES.len();
    PHRASES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    #[test]
    fn same_day_same_phrase() {
        assert_eq!(phrase_for(date(2024, 4, 2)), phrase_for(date(2024, 4, 2)));
    }

    #[test]
    fn consecutive_days_rotate_through_all_phrases() {
        let start = date(2024, 1, 1);
        let mut seen: Vec<&str> = (0..3)
            .map(|i| phrase_for(start.checked_add(jiff::Span::new().days(i)).unwrap()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PHRASES.len());
    }
}

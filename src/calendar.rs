//! Weekday availability and day-range iteration.
//!
//! Catalog entries carry capitalized French weekday names ("Lundi" ..
//! "Dimanche"); availability is an exact string membership test, with an
//! empty `open_days` meaning open every day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::CatalogEntry;

/// Capitalized French name of a weekday, matching catalog values exactly.
pub fn french_day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lundi",
        Weekday::Tue => "Mardi",
        Weekday::Wed => "Mercredi",
        Weekday::Thu => "Jeudi",
        Weekday::Fri => "Vendredi",
        Weekday::Sat => "Samedi",
        Weekday::Sun => "Dimanche",
    }
}

/// Capitalized French weekday name for a date.
pub fn day_name(date: NaiveDate) -> &'static str {
    french_day_name(date.weekday())
}

/// Whether a catalog entry is open on the given weekday name.
///
/// Empty `open_days` = open every day.
pub fn is_open_on_day<E: CatalogEntry + ?Sized>(entry: &E, day: &str) -> bool {
    let days = entry.open_days();
    days.is_empty() || days.iter().any(|d| d == day)
}

/// Ascending calendar days of `[from, to]` inclusive.
///
/// Empty when `to < from`.
pub fn day_range(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = from;
    while current <= to {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalActivity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_french_day_names() {
        assert_eq!(day_name(date(2025, 1, 13)), "Lundi");
        assert_eq!(day_name(date(2025, 1, 14)), "Mardi");
        assert_eq!(day_name(date(2025, 1, 18)), "Samedi");
        assert_eq!(day_name(date(2025, 1, 19)), "Dimanche");
    }

    #[test]
    fn test_open_days_membership() {
        let act = LocalActivity::new(1, "Marché", "site")
            .with_open_days(vec!["Samedi".into(), "Dimanche".into()]);

        assert!(is_open_on_day(&act, "Samedi"));
        assert!(!is_open_on_day(&act, "Lundi"));
    }

    #[test]
    fn test_empty_open_days_means_always_open() {
        let act = LocalActivity::new(1, "Plage", "site");
        assert!(is_open_on_day(&act, "Lundi"));
        assert!(is_open_on_day(&act, "Dimanche"));
    }

    #[test]
    fn test_membership_is_exact_string_equality() {
        let act = LocalActivity::new(1, "Visite", "site").with_open_days(vec!["samedi".into()]);
        // Lowercase catalog value does not match the capitalized name.
        assert!(!is_open_on_day(&act, "Samedi"));
    }

    #[test]
    fn test_day_range_inclusive() {
        let days = day_range(date(2025, 6, 1), date(2025, 6, 5));
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], date(2025, 6, 1));
        assert_eq!(days[4], date(2025, 6, 5));
    }

    #[test]
    fn test_day_range_single_day() {
        let days = day_range(date(2025, 6, 1), date(2025, 6, 1));
        assert_eq!(days, vec![date(2025, 6, 1)]);
    }

    #[test]
    fn test_day_range_reversed_is_empty() {
        assert!(day_range(date(2025, 6, 5), date(2025, 6, 1)).is_empty());
    }

    #[test]
    fn test_day_range_crosses_month_boundary() {
        let days = day_range(date(2025, 6, 29), date(2025, 7, 2));
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], date(2025, 7, 1));
    }
}

use chrono::Datelike;

use crate::domain::menu::value_objects::{DateKey, DateTokenSet};

/// The four spellings of a date searched for in scraped text:
/// `september 5`, `sep 5`, `9/5` and `09/05`.
pub fn build_date_tokens(date: DateKey) -> DateTokenSet {
    let date = date.date();
    let (month, day) = (date.month(), date.day());

    // Month names are read from the calendar date, never from a zone-shifted
    // instant: UTC midnight rendered in a western zone names the previous
    // month on the 1st.
    DateTokenSet::new(vec![
        format!("{} {}", date.format("%B"), day),
        format!("{} {}", date.format("%b"), day),
        format!("{month}/{day}"),
        format!("{month:02}/{day:02}"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_for_single_digit_date() {
        let tokens = build_date_tokens("2025-09-05".parse().unwrap());

        assert_eq!(
            tokens.tokens(),
            &["september 5", "sep 5", "9/5", "09/05"].map(String::from)
        );
    }

    #[test]
    fn test_first_of_month_keeps_its_own_month_name() {
        let tokens = build_date_tokens("2025-09-01".parse().unwrap());

        assert!(tokens.contains("september 1"));
        assert!(tokens.contains("sep 1"));
    }

    #[test]
    fn test_two_digit_date_has_identical_numeric_forms() {
        let tokens = build_date_tokens("2025-12-25".parse().unwrap());

        assert!(tokens.contains("december 25"));
        assert!(tokens.contains("dec 25"));
        assert!(tokens.contains("12/25"));
    }

    #[test]
    fn test_month_boundaries_never_shift_month() {
        let last = build_date_tokens("2025-08-31".parse().unwrap());
        assert!(last.contains("august 31"));
        assert!(last.contains("aug 31"));

        let first = build_date_tokens("2026-01-01".parse().unwrap());
        assert!(first.contains("january 1"));
        assert!(first.contains("1/1"));
    }
}

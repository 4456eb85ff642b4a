use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use crate::domain::menu::{
    entities::MenuEntry,
    extraction::{
        patterns::{FieldPattern, MenuField, compile_patterns},
        text::normalize_text,
    },
    value_objects::DateTokenSet,
};

/// Lines searched before the first line mentioning the date.
pub const WINDOW_BEFORE: usize = 20;
/// Lines searched from the first line mentioning the date onwards.
pub const WINDOW_AFTER: usize = 40;

pub const LINE_PATTERNS: &[FieldPattern] = &[
    FieldPattern {
        field: MenuField::Breakfast,
        pattern: r"(?i)breakfast[^:]*:\s*(.*)",
    },
    FieldPattern {
        field: MenuField::Lunch,
        pattern: r"(?i)\blunch[^:]*:\s*(.*)",
    },
];

static COMPILED_LINE_PATTERNS: LazyLock<Vec<(MenuField, Regex)>> =
    LazyLock::new(|| compile_patterns(LINE_PATTERNS));

#[derive(Debug, Default)]
pub(crate) struct FieldSlots {
    breakfast: Option<String>,
    lunch: Option<String>,
}

impl FieldSlots {
    pub(crate) fn slot_mut(&mut self, field: MenuField) -> &mut Option<String> {
        match field {
            MenuField::Breakfast => &mut self.breakfast,
            MenuField::Lunch => &mut self.lunch,
        }
    }

    pub(crate) fn is_set(&self, field: MenuField) -> bool {
        match field {
            MenuField::Breakfast => self.breakfast.is_some(),
            MenuField::Lunch => self.lunch.is_some(),
        }
    }

    fn is_complete(&self) -> bool {
        self.breakfast.is_some() && self.lunch.is_some()
    }

    pub(crate) fn into_entry(self) -> Option<MenuEntry> {
        if self.breakfast.is_none() && self.lunch.is_none() {
            return None;
        }

        Some(MenuEntry::new(self.breakfast, self.lunch))
    }
}

/// Everything after the first `:` of the original line, normalized.
fn value_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, rest)| normalize_text(rest))
        .filter(|value| !value.is_empty())
}

fn search_window(anchor: Option<usize>, len: usize) -> Range<usize> {
    match anchor {
        Some(idx) => idx.saturating_sub(WINDOW_BEFORE)..(idx + WINDOW_AFTER).min(len),
        None => 0..len,
    }
}

/// Index of the first line mentioning any spelling of the date.
pub fn find_date_anchor(tokens: &DateTokenSet, lines: &[String]) -> Option<usize> {
    lines
        .iter()
        .position(|line| tokens.matches(&line.to_lowercase()))
}

/// Pulls a breakfast and a lunch line out of a flat line sequence.
///
/// Lines around the first mention of the date are searched first, then the
/// whole sequence for any field still missing. Each field is taken from the
/// first matching line independently, so the two values may come from
/// different parts of the document. Returns `None` when neither field is found.
pub fn extract_from_lines(tokens: &DateTokenSet, lines: &[String]) -> Option<MenuEntry> {
    let window = search_window(find_date_anchor(tokens, lines), lines.len());

    let patterns = &*COMPILED_LINE_PATTERNS;
    let mut found = FieldSlots::default();

    for line in &lines[window] {
        for (field, regex) in patterns {
            if found.is_set(*field) || !regex.is_match(line) {
                continue;
            }
            // An empty value keeps the scan going.
            *found.slot_mut(*field) = value_after_colon(line);
        }
        if found.is_complete() {
            break;
        }
    }

    for (field, regex) in patterns {
        if found.is_set(*field) {
            continue;
        }
        *found.slot_mut(*field) = lines
            .iter()
            .find(|line| regex.is_match(line))
            .and_then(|line| value_after_colon(line));
    }

    found.into_entry()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::extraction::date_tokens::build_date_tokens;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn tokens(date: &str) -> DateTokenSet {
        build_date_tokens(date.parse().unwrap())
    }

    #[test]
    fn test_extracts_both_fields_near_date() {
        let entry = extract_from_lines(
            &tokens("2025-09-05"),
            &lines(&["September 5", "Breakfast: Pancakes", "Lunch: Pizza"]),
        )
        .unwrap();

        assert_eq!(entry.breakfast.as_deref(), Some("Pancakes"));
        assert_eq!(entry.lunch.as_deref(), Some("Pizza"));
    }

    #[test]
    fn test_falls_back_to_whole_sequence_without_date() {
        let entry =
            extract_from_lines(&tokens("2025-09-05"), &lines(&["Breakfast: Waffles"])).unwrap();

        assert_eq!(entry.breakfast.as_deref(), Some("Waffles"));
        assert_eq!(entry.lunch, None);
    }

    #[test]
    fn test_returns_none_without_labels() {
        assert_eq!(
            extract_from_lines(&tokens("2025-09-05"), &lines(&["September 5", "Pizza"])),
            None
        );
    }

    #[test]
    fn test_prefers_lines_inside_date_window() {
        let mut raw = vec!["Lunch: Far away".to_string()];
        raw.extend((0..30).map(|i| format!("filler {i}")));
        raw.push("9/5".to_string());
        raw.push("Lunch: Tacos".to_string());

        let entry = extract_from_lines(&tokens("2025-09-05"), &raw).unwrap();
        assert_eq!(entry.lunch.as_deref(), Some("Tacos"));
    }

    #[test]
    fn test_missing_field_found_outside_window() {
        let mut raw = vec!["Breakfast: Cereal".to_string()];
        raw.extend((0..30).map(|i| format!("filler {i}")));
        raw.push("Sep 5".to_string());
        raw.push("Lunch: Tacos".to_string());

        let entry = extract_from_lines(&tokens("2025-09-05"), &raw).unwrap();
        assert_eq!(entry.breakfast.as_deref(), Some("Cereal"));
        assert_eq!(entry.lunch.as_deref(), Some("Tacos"));
    }

    #[test]
    fn test_value_keeps_later_colons_and_original_case() {
        let entry = extract_from_lines(
            &tokens("2025-09-05"),
            &lines(&["LUNCH menu:  Chef's   Salad: Ranch"]),
        )
        .unwrap();

        assert_eq!(entry.lunch.as_deref(), Some("Chef's Salad: Ranch"));
    }

    #[test]
    fn test_lunch_requires_word_boundary() {
        assert_eq!(
            extract_from_lines(&tokens("2025-09-05"), &lines(&["Brunch: Bagels"])),
            None
        );
    }

    #[test]
    fn test_empty_label_value_keeps_scanning_window() {
        let entry = extract_from_lines(
            &tokens("2025-09-05"),
            &lines(&["09/05", "Lunch:", "Lunch: Soup"]),
        )
        .unwrap();

        assert_eq!(entry.lunch.as_deref(), Some("Soup"));
    }

    /// A lunch label at index 0, the date at `anchor` and a second lunch
    /// label at `label_at`; everything else is filler.
    fn windowed(anchor: usize, label_at: usize) -> Vec<String> {
        (0..=anchor.max(label_at) + 5)
            .map(|i| match i {
                0 => "Lunch: Global".to_string(),
                i if i == anchor => "Sep 5".to_string(),
                i if i == label_at => "Lunch: Edge".to_string(),
                i => format!("filler {i}"),
            })
            .collect()
    }

    fn lunch_with(anchor: usize, label_at: usize) -> Option<String> {
        extract_from_lines(&tokens("2025-09-05"), &windowed(anchor, label_at))
            .and_then(|entry| entry.lunch)
    }

    #[test]
    fn test_window_upper_bound_is_exclusive() {
        let anchor = 30;

        assert_eq!(
            lunch_with(anchor, anchor + WINDOW_AFTER - 1).as_deref(),
            Some("Edge")
        );
        assert_eq!(
            lunch_with(anchor, anchor + WINDOW_AFTER).as_deref(),
            Some("Global")
        );
    }

    #[test]
    fn test_window_lower_bound_is_inclusive() {
        let anchor = 30;

        assert_eq!(
            lunch_with(anchor, anchor - WINDOW_BEFORE).as_deref(),
            Some("Edge")
        );
        assert_eq!(
            lunch_with(anchor, anchor - WINDOW_BEFORE - 1).as_deref(),
            Some("Global")
        );
    }

    #[test]
    fn test_window_is_clamped_to_sequence_bounds() {
        assert_eq!(search_window(Some(5), 100), 0..45);
        assert_eq!(search_window(Some(90), 100), 70..100);
        assert_eq!(search_window(None, 7), 0..7);
    }
}

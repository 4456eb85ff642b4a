use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    Breakfast,
    Lunch,
}

/// A labelled pattern and the menu field it fills.
#[derive(Debug, Clone, Copy)]
pub struct FieldPattern {
    pub field: MenuField,
    pub pattern: &'static str,
}

/// Compiles a pattern that ships with the binary. Panics on an invalid literal.
pub(crate) fn builtin_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

pub(crate) fn compile_patterns(patterns: &[FieldPattern]) -> Vec<(MenuField, Regex)> {
    patterns
        .iter()
        .map(|p| (p.field, builtin_regex(p.pattern)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::extraction::{
        ingest::IngestMode, line_extractor::LINE_PATTERNS, scraper::HTML_FALLBACK_PATTERNS,
    };

    #[test]
    fn test_every_builtin_table_compiles_completely() {
        assert_eq!(compile_patterns(LINE_PATTERNS).len(), LINE_PATTERNS.len());
        assert_eq!(
            compile_patterns(HTML_FALLBACK_PATTERNS).len(),
            HTML_FALLBACK_PATTERNS.len()
        );
        // Forces the ingest statics.
        assert_eq!(IngestMode::detect("Breakfast Menu"), IngestMode::Breakfast);
    }

    #[test]
    #[should_panic(expected = "invalid built-in pattern")]
    fn test_broken_literal_is_loud() {
        compile_patterns(&[FieldPattern {
            field: MenuField::Lunch,
            pattern: r"(?i)lunch[",
        }]);
    }
}

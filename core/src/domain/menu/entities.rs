use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::value_objects::DateKey;

/// Literal stored in place of a menu on days without school.
pub const NO_SCHOOL: &str = "No School";

/// Breakfast and lunch text for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuEntry {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
}

impl MenuEntry {
    pub fn new(breakfast: Option<String>, lunch: Option<String>) -> Self {
        Self { breakfast, lunch }
    }

    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none()
    }

    /// Overlays `newer` on top of `self`; fields absent in `newer` keep their stored value.
    pub fn merge(self, newer: MenuEntry) -> MenuEntry {
        MenuEntry {
            breakfast: newer.breakfast.or(self.breakfast),
            lunch: newer.lunch.or(self.lunch),
        }
    }
}

/// Where a menu lookup got its answer from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MenuSourceKind {
    Cache,
    Scraped,
    ScrapedMonth,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLookup {
    pub date: DateKey,
    pub entry: MenuEntry,
    pub source: MenuSourceKind,
}

impl MenuLookup {
    pub fn new(date: DateKey, entry: MenuEntry, source: MenuSourceKind) -> Self {
        Self {
            date,
            entry,
            source,
        }
    }

    pub fn empty(date: DateKey) -> Self {
        Self::new(date, MenuEntry::default(), MenuSourceKind::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_stored_fields_missing_from_newer() {
        let stored = MenuEntry::new(Some("Pancakes".into()), Some("Pizza".into()));
        let merged = stored.merge(MenuEntry::new(Some("Waffles".into()), None));

        assert_eq!(merged.breakfast.as_deref(), Some("Waffles"));
        assert_eq!(merged.lunch.as_deref(), Some("Pizza"));
    }

    #[test]
    fn test_source_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&MenuSourceKind::ScrapedMonth).unwrap();
        assert_eq!(json, "\"scraped-month\"");
    }
}

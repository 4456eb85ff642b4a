use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{MenuEntry, NO_SCHOOL},
        extraction::patterns::builtin_regex,
        value_objects::{DateKey, MonthKey},
    },
};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    builtin_regex(&format!(
        r"(?i)\b({})\b\s+(\d{{4}})",
        MONTH_NAMES.join("|")
    ))
});
static BREAKFAST_MENU_RE: LazyLock<Regex> =
    LazyLock::new(|| builtin_regex(r"(?i)breakfast\s+menu"));
static LUNCH_MENU_RE: LazyLock<Regex> =
    LazyLock::new(|| builtin_regex(r"(?i)lunch\s+menu"));
static DAY_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    builtin_regex(
        r"(?i)^(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday),\s+\w+\s+(\d+)\s+Menu:",
    )
});
static NO_SCHOOL_RE: LazyLock<Regex> =
    LazyLock::new(|| builtin_regex(r"(?i)^No\s+School$"));
static OPTION_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| builtin_regex(r"^Option\s*\d"));

static SECTION_HEADERS: LazyLock<[(LunchSection, Regex); 3]> = LazyLock::new(|| {
    [
        (
            LunchSection::Meat,
            builtin_regex(r"(?i)^Option\s*1\s*[-–]\s*Meat"),
        ),
        (
            LunchSection::Vegetarian,
            builtin_regex(r"(?i)^Option\s*2\s*[-–]\s*Vegetarian"),
        ),
        (
            LunchSection::Deli,
            builtin_regex(r"(?i)^Option\s*3\s*[-–]\s*(?:Cold\s+)?Deli"),
        ),
    ]
});

/// Lines never taken as the day's breakfast item.
static BREAKFAST_SIDES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        builtin_regex(r"(?i)^Fresh\s+Fruits$"),
        builtin_regex(r"(?i)^Milk$"),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestMode {
    Breakfast,
    Lunch,
}

impl IngestMode {
    /// Breakfast only when the document calls itself a breakfast menu and
    /// never mentions a lunch menu.
    pub fn detect(text: &str) -> Self {
        if BREAKFAST_MENU_RE.is_match(text) && !LUNCH_MENU_RE.is_match(text) {
            IngestMode::Breakfast
        } else {
            IngestMode::Lunch
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LunchSection {
    #[default]
    None,
    Meat,
    Vegetarian,
    Deli,
}

/// Finds the first `<Month> <Year>` pair in the document.
pub fn parse_month_and_year(text: &str) -> Option<MonthKey> {
    let caps = MONTH_YEAR_RE.captures(text)?;
    let name = caps.get(1)?.as_str().to_lowercase();
    let month = MONTH_NAMES.iter().position(|m| *m == name)? as u32 + 1;
    let year = caps.get(2)?.as_str().parse::<i32>().ok()?;

    MonthKey::new(year, month)
}

/// `Meat: X | Vegetarian: Y | Deli: Z`, with `None` standing in for a missing option.
pub fn compose_lunch(meat: Option<&str>, vegetarian: Option<&str>, deli: Option<&str>) -> String {
    [("Meat", meat), ("Vegetarian", vegetarian), ("Deli", deli)]
        .iter()
        .map(|(label, value)| format!("{label}: {}", value.unwrap_or("None")))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DayMenuAccumulator {
    date: DateKey,
    section: LunchSection,
    meat: Option<String>,
    vegetarian: Option<String>,
    deli: Option<String>,
    no_school: bool,
    breakfast_item: Option<String>,
}

impl DayMenuAccumulator {
    fn new(date: DateKey) -> Self {
        Self {
            date,
            section: LunchSection::None,
            meat: None,
            vegetarian: None,
            deli: None,
            no_school: false,
            breakfast_item: None,
        }
    }

    fn absorb(&mut self, mode: IngestMode, line: &str) {
        if NO_SCHOOL_RE.is_match(line) {
            self.no_school = true;
            self.section = LunchSection::None;
            return;
        }
        if self.no_school {
            return;
        }

        match mode {
            IngestMode::Lunch => {
                if let Some((section, _)) = SECTION_HEADERS.iter().find(|(_, re)| re.is_match(line))
                {
                    self.section = *section;
                    return;
                }
                if OPTION_HEADER_RE.is_match(line) {
                    return;
                }
                let slot = match self.section {
                    LunchSection::None => return,
                    LunchSection::Meat => &mut self.meat,
                    LunchSection::Vegetarian => &mut self.vegetarian,
                    LunchSection::Deli => &mut self.deli,
                };
                // Last line of a section wins.
                *slot = Some(line.to_string());
            }
            IngestMode::Breakfast => {
                let is_candidate = !OPTION_HEADER_RE.is_match(line)
                    && !BREAKFAST_SIDES.iter().any(|re| re.is_match(line));
                if self.breakfast_item.is_none() && is_candidate {
                    self.breakfast_item = Some(line.to_string());
                }
            }
        }
    }

    fn into_entry(self, mode: IngestMode) -> MenuEntry {
        let no_school = || Some(NO_SCHOOL.to_string());

        match (mode, self.no_school) {
            (IngestMode::Lunch, true) => MenuEntry::new(None, no_school()),
            (IngestMode::Breakfast, true) => MenuEntry::new(no_school(), no_school()),
            (IngestMode::Lunch, false) => MenuEntry::new(
                None,
                Some(compose_lunch(
                    self.meat.as_deref(),
                    self.vegetarian.as_deref(),
                    self.deli.as_deref(),
                )),
            ),
            (IngestMode::Breakfast, false) => MenuEntry::new(self.breakfast_item, None),
        }
    }
}

/// Parser state threaded through the document one line at a time.
#[derive(Debug)]
struct IngestState {
    mode: IngestMode,
    month: MonthKey,
    current: Option<DayMenuAccumulator>,
    results: BTreeMap<DateKey, MenuEntry>,
}

impl IngestState {
    fn new(mode: IngestMode, month: MonthKey) -> Self {
        Self {
            mode,
            month,
            current: None,
            results: BTreeMap::new(),
        }
    }

    fn step(mut self, raw: &str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return self;
        }

        if let Some(caps) = DAY_HEADER_RE.captures(line) {
            self.flush();
            self.current = caps[1]
                .parse::<u32>()
                .ok()
                .and_then(|day| self.month.day(day))
                .map(DayMenuAccumulator::new);
            if self.current.is_none() {
                warn!(month = %self.month, "ignoring day header with an invalid day: {}", line);
            }
            return self;
        }

        let mode = self.mode;
        if let Some(day) = self.current.as_mut() {
            day.absorb(mode, line);
        }
        self
    }

    fn flush(&mut self) {
        if let Some(day) = self.current.take() {
            let date = day.date;
            self.results.insert(date, day.into_entry(self.mode));
        }
    }

    fn finish(mut self) -> BTreeMap<DateKey, MenuEntry> {
        self.flush();
        self.results
    }
}

/// Parses a pasted monthly menu into one entry per day header.
///
/// The document must name its month and year (`September 2025`); that is the
/// only hard failure. Lunch documents produce `Meat | Vegetarian | Deli`
/// summaries, breakfast documents the first real item of each day.
pub fn parse_menu_text(text: &str) -> Result<BTreeMap<DateKey, MenuEntry>, CoreError> {
    let month = parse_month_and_year(text).ok_or_else(|| {
        CoreError::InvalidInput("Could not find month and year in text".to_string())
    })?;
    let mode = IngestMode::detect(text);

    Ok(text
        .lines()
        .fold(IngestState::new(mode, month), IngestState::step)
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(date: &str) -> DateKey {
        date.parse().unwrap()
    }

    #[test]
    fn test_lunch_document_composes_three_options() {
        let text = "September 2025 Lunch Menu:\n\
                    Monday, September 1 Menu:\n\
                    Option 1 - Meat\n\
                    Burger\n\
                    Option 2 - Vegetarian\n\
                    Veggie Wrap\n\
                    Option 3 - Deli\n\
                    Turkey Sandwich\n";

        let menus = parse_menu_text(text).unwrap();

        assert_eq!(menus.len(), 1);
        assert_eq!(
            menus[&key("2025-09-01")].lunch.as_deref(),
            Some("Meat: Burger | Vegetarian: Veggie Wrap | Deli: Turkey Sandwich")
        );
    }

    #[test]
    fn test_missing_options_default_to_none_and_last_line_wins() {
        let text = "October 2025 Lunch Menu:\r\n\
                    Tuesday, October 7 Menu:\r\n\
                    Option 1 – Meat\r\n\
                    Corn Dog\r\n\
                    Hot Dog\r\n\
                    Option 3 – Cold Deli\r\n\
                    Ham Sub\r\n";

        let menus = parse_menu_text(text).unwrap();

        assert_eq!(
            menus[&key("2025-10-07")].lunch.as_deref(),
            Some("Meat: Hot Dog | Vegetarian: None | Deli: Ham Sub")
        );
    }

    #[test]
    fn test_no_school_day_in_either_mode() {
        let lunch = parse_menu_text(
            "September 2025 Lunch Menu:\nMonday, September 1 Menu:\nNo School\nOption 1 - Meat\nBurger\n",
        )
        .unwrap();
        assert_eq!(
            lunch[&key("2025-09-01")],
            MenuEntry::new(None, Some(NO_SCHOOL.to_string()))
        );

        let breakfast = parse_menu_text(
            "September 2025 Breakfast Menu:\nMonday, September 1 Menu:\nno school\n",
        )
        .unwrap();
        assert_eq!(
            breakfast[&key("2025-09-01")].lunch.as_deref(),
            Some(NO_SCHOOL)
        );
        assert_eq!(
            breakfast[&key("2025-09-01")].breakfast.as_deref(),
            Some(NO_SCHOOL)
        );
    }

    #[test]
    fn test_breakfast_mode_skips_sides_and_options() {
        let text = "September 2025 Breakfast Menu\n\
                    Wednesday, September 3 Menu:\n\
                    Option 1\n\
                    Fresh Fruits\n\
                    Milk\n\
                    Blueberry Muffin\n\
                    Yogurt Parfait\n\
                    Thursday, September 4 Menu:\n\
                    Milk\n";

        let menus = parse_menu_text(text).unwrap();

        assert_eq!(
            menus[&key("2025-09-03")],
            MenuEntry::new(Some("Blueberry Muffin".to_string()), None)
        );
        assert_eq!(menus[&key("2025-09-04")], MenuEntry::default());
    }

    #[test]
    fn test_missing_month_header_is_an_input_error() {
        let result = parse_menu_text("Monday, September 1 Menu:\nOption 1 - Meat\nBurger\n");

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_lines_before_first_day_and_invalid_days_are_ignored() {
        let text = "September 2025 Lunch Menu:\n\
                    Option 1 - Meat\n\
                    Orphan Burger\n\
                    Tuesday, September 31 Menu:\n\
                    Option 1 - Meat\n\
                    Ghost Meal\n\
                    Wednesday, September 10 Menu:\n\
                    Option 2 - Vegetarian\n\
                    Bean Burrito\n";

        let menus = parse_menu_text(text).unwrap();

        assert_eq!(menus.keys().collect::<Vec<_>>(), vec![&key("2025-09-10")]);
        assert_eq!(
            menus[&key("2025-09-10")].lunch.as_deref(),
            Some("Meat: None | Vegetarian: Bean Burrito | Deli: None")
        );
    }

    #[test]
    fn test_mode_detection() {
        assert_eq!(IngestMode::detect("BREAKFAST MENU"), IngestMode::Breakfast);
        assert_eq!(
            IngestMode::detect("Breakfast Menu and Lunch Menu"),
            IngestMode::Lunch
        );
        assert_eq!(IngestMode::detect("whatever"), IngestMode::Lunch);
    }

    #[test]
    fn test_month_header_is_case_insensitive() {
        assert_eq!(
            parse_month_and_year("menus for MARCH 2026"),
            Some("2026-03".parse().unwrap())
        );
        assert_eq!(parse_month_and_year("Marching 2026"), None);
    }
}

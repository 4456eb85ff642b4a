use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Calendar day, rendered on the wire as zero-padded `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for DateKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CoreError::InvalidInput(format!("invalid date '{s}', expected YYYY-MM-DD")))
    }
}

impl TryFrom<String> for DateKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Calendar month, rendered on the wire as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Rejects months chrono cannot represent as well as 0 and 13+.
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The given day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<DateKey> {
        DateKey::from_ymd(self.year, self.month, day)
    }

    pub fn last_day(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };

        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first| first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(28)
    }

    /// Every day from the 1st through the last day of the month.
    pub fn days(&self) -> impl Iterator<Item = DateKey> + '_ {
        (1..=self.last_day()).filter_map(|day| self.day(day))
    }
}

impl From<DateKey> for MonthKey {
    fn from(key: DateKey) -> Self {
        key.month_key()
    }
}

impl FromStr for MonthKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidInput(format!("invalid month '{s}', expected YYYY-MM"));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Lowercase spellings a human-authored menu might use for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTokenSet(Vec<String>);

impl DateTokenSet {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens.into_iter().map(|t| t.to_lowercase()).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Substring match against an already lowercased line.
    pub fn matches(&self, lowered_line: &str) -> bool {
        self.0.iter().any(|t| lowered_line.contains(t.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct SaveMenuInput {
    pub date: DateKey,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub pin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngestMonthOutcome {
    #[schema(value_type = String, example = "2025-09")]
    pub month: MonthKey,
    pub saved: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngestTextOutcome {
    pub saved: usize,
    pub dates: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_round_trips_zero_padded() {
        let key: DateKey = "2025-09-05".parse().unwrap();
        assert_eq!(key.to_string(), "2025-09-05");
        assert_eq!(key.month_key().to_string(), "2025-09");
    }

    #[test]
    fn test_date_key_rejects_garbage() {
        assert!(matches!(
            "next tuesday".parse::<DateKey>(),
            Err(CoreError::InvalidInput(_))
        ));
        assert!("2025-02-30".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_month_key_last_day() {
        assert_eq!("2024-02".parse::<MonthKey>().unwrap().last_day(), 29);
        assert_eq!("2025-02".parse::<MonthKey>().unwrap().last_day(), 28);
        assert_eq!("2025-12".parse::<MonthKey>().unwrap().last_day(), 31);
        assert_eq!("2025-09".parse::<MonthKey>().unwrap().days().count(), 30);
    }

    #[test]
    fn test_month_key_rejects_month_out_of_range() {
        assert!("2025-13".parse::<MonthKey>().is_err());
        assert!("2025".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_date_key_serde_as_string() {
        let key = DateKey::from_ymd(2025, 9, 1).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2025-09-01\"");
        let back: DateKey = serde_json::from_str("\"2025-09-01\"").unwrap();
        assert_eq!(back, key);
    }
}

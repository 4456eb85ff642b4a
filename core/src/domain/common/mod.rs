use std::{path::PathBuf, time::Duration};

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod policies;
pub mod services;

pub const DEFAULT_MENU_SOURCE: &str =
    "https://www.schoolnutritionandfitness.com/webmenus2/#/ocr-pdf?id=689ecc6ac503dc2f970dd833";

#[derive(Clone, Debug)]
pub struct LunchboxConfig {
    pub menu: MenuConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct MenuConfig {
    pub source_url: String,
    pub fetch_timeout: Duration,
    pub admin_pin: Option<String>,
    pub school_timezone: Tz,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_MENU_SOURCE.to_string(),
            fetch_timeout: Duration::from_secs(15),
            admin_pin: None,
            school_timezone: chrono_tz::America::Los_Angeles,
        }
    }
}

#[derive(Clone, Debug)]
pub enum StorageConfig {
    Postgres { database_url: String },
    File { data_dir: PathBuf },
}

impl StorageConfig {
    /// Postgres on the first non-empty database URL, the JSON file store otherwise.
    pub fn select<I>(database_urls: I, data_dir: PathBuf) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        database_urls
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty())
            .map(|database_url| StorageConfig::Postgres { database_url })
            .unwrap_or(StorageConfig::File { data_dir })
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageConfig::Postgres { .. } => "postgres",
            StorageConfig::File { .. } => "file",
        }
    }
}

/// Parses an IANA zone name such as `America/Los_Angeles`.
pub fn parse_timezone(name: &str) -> Result<Tz, CoreError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| CoreError::InvalidInput(format!("unknown time zone '{name}'")))
}

/// Current calendar date in the given zone.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

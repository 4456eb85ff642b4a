use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{MenuEntry, MenuLookup},
        value_objects::{DateKey, IngestMonthOutcome, IngestTextOutcome, MonthKey, SaveMenuInput},
    },
};

/// A fetched document together with the metadata the scrapers look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchedPage {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Repository trait for cached menus
#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn get_menu_for_date(
        &self,
        date: DateKey,
    ) -> impl Future<Output = Result<Option<MenuEntry>, CoreError>> + Send;

    fn save_menu_for_date(
        &self,
        date: DateKey,
        entry: MenuEntry,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Overlays `entry` on the stored menu for `date` in one atomic step and
    /// returns the result. Fields absent from `entry` keep their stored value.
    fn merge_menu_for_date(
        &self,
        date: DateKey,
        entry: MenuEntry,
    ) -> impl Future<Output = Result<MenuEntry, CoreError>> + Send;
}

/// Fetches remote pages for the scrapers
#[cfg_attr(test, mockall::automock)]
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, CoreError>> + Send;
}

pub trait MenuService: Send + Sync {
    /// Cached menu for a date, scraping the source on a miss
    fn get_menu(&self, date: DateKey)
    -> impl Future<Output = Result<MenuLookup, CoreError>> + Send;

    /// Manual correction, guarded by the admin PIN when one is configured
    fn save_menu(
        &self,
        input: SaveMenuInput,
    ) -> impl Future<Output = Result<MenuEntry, CoreError>> + Send;

    /// Scrape a whole month and cache every day found
    fn ingest_month(
        &self,
        month: MonthKey,
    ) -> impl Future<Output = Result<IngestMonthOutcome, CoreError>> + Send;

    /// Parse a pasted menu document and cache every day it lists
    fn ingest_text(
        &self,
        text: String,
    ) -> impl Future<Output = Result<IngestTextOutcome, CoreError>> + Send;

    /// Current month in the school time zone
    fn current_month(&self) -> MonthKey;
}

use tracing::{info, instrument, warn};

use crate::domain::{
    choice::ports::ChoiceRepository,
    common::{
        entities::app_errors::CoreError, policies::ensure_policy, services::Service, today_in,
    },
    health::ports::HealthCheckRepository,
    menu::{
        entities::{MenuEntry, MenuLookup, MenuSourceKind},
        extraction::{parse_menu_text, scrape_for_date, scrape_for_month},
        policies::pin_matches,
        ports::{MenuRepository, MenuService, PageFetcher},
        value_objects::{DateKey, IngestMonthOutcome, IngestTextOutcome, MonthKey, SaveMenuInput},
    },
    student::ports::StudentRepository,
};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl<M, S, C, F, HC> Service<M, S, C, F, HC>
where
    M: MenuRepository,
    S: StudentRepository,
    C: ChoiceRepository,
    F: PageFetcher,
    HC: HealthCheckRepository,
{
    /// Scrapes the month containing `date`, caches every day found and
    /// returns the stored entry for `date` if the month covered it.
    async fn fill_from_month(&self, date: DateKey) -> Result<Option<MenuEntry>, CoreError> {
        let menus = scrape_for_month(
            &self.page_fetcher,
            &self.config.source_url,
            date.month_key(),
        )
        .await;

        let mut covered = false;
        for (day, entry) in menus {
            self.menu_repository.save_menu_for_date(day, entry).await?;
            covered |= day == date;
        }

        if !covered {
            return Ok(None);
        }
        self.menu_repository.get_menu_for_date(date).await
    }
}

impl<M, S, C, F, HC> MenuService for Service<M, S, C, F, HC>
where
    M: MenuRepository,
    S: StudentRepository,
    C: ChoiceRepository,
    F: PageFetcher,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self), fields(date = %date))]
    async fn get_menu(&self, date: DateKey) -> Result<MenuLookup, CoreError> {
        let cached = self.menu_repository.get_menu_for_date(date).await?;
        if let Some(entry) = cached.filter(|entry| !entry.is_empty()) {
            return Ok(MenuLookup::new(date, entry, MenuSourceKind::Cache));
        }

        if let Some(entry) =
            scrape_for_date(&self.page_fetcher, &self.config.source_url, date).await
        {
            self.menu_repository
                .save_menu_for_date(date, entry.clone())
                .await?;
            return Ok(MenuLookup::new(date, entry, MenuSourceKind::Scraped));
        }

        match self.fill_from_month(date).await {
            Ok(Some(entry)) => {
                return Ok(MenuLookup::new(date, entry, MenuSourceKind::ScrapedMonth));
            }
            Ok(None) => {}
            Err(e) => warn!("month fallback failed: {}", e),
        }

        Ok(MenuLookup::empty(date))
    }

    #[instrument(skip(self, input), fields(date = %input.date))]
    async fn save_menu(&self, input: SaveMenuInput) -> Result<MenuEntry, CoreError> {
        ensure_policy(
            pin_matches(self.config.admin_pin.as_deref(), input.pin.as_deref()),
            "admin pin mismatch",
        )?;

        let entry = MenuEntry::new(non_empty(input.breakfast), non_empty(input.lunch));
        self.menu_repository
            .save_menu_for_date(input.date, entry.clone())
            .await?;

        Ok(entry)
    }

    #[instrument(skip(self), fields(month = %month))]
    async fn ingest_month(&self, month: MonthKey) -> Result<IngestMonthOutcome, CoreError> {
        let menus = scrape_for_month(&self.page_fetcher, &self.config.source_url, month).await;

        let mut saved = 0;
        for (date, entry) in menus {
            self.menu_repository.save_menu_for_date(date, entry).await?;
            saved += 1;
        }

        info!(saved, "month ingested");
        Ok(IngestMonthOutcome { month, saved })
    }

    #[instrument(skip(self, text), fields(len = text.len()))]
    async fn ingest_text(&self, text: String) -> Result<IngestTextOutcome, CoreError> {
        let menus = parse_menu_text(&text)?;
        let dates = menus.len();

        let mut saved = 0;
        for (date, entry) in menus {
            self.menu_repository.merge_menu_for_date(date, entry).await?;
            saved += 1;
        }

        info!(saved, dates, "menu text ingested");
        Ok(IngestTextOutcome { saved, dates })
    }

    fn current_month(&self) -> MonthKey {
        DateKey::from(today_in(self.config.school_timezone)).month_key()
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        common::{MenuConfig, services::mocks::Mocks},
        menu::ports::{FetchedPage, MockPageFetcher},
    };

    const SOURCE: &str = "https://menus.example.org/";

    fn config(admin_pin: Option<&str>) -> MenuConfig {
        MenuConfig {
            source_url: SOURCE.to_string(),
            admin_pin: admin_pin.map(str::to_string),
            ..MenuConfig::default()
        }
    }

    fn entry(breakfast: Option<&str>, lunch: Option<&str>) -> MenuEntry {
        MenuEntry::new(breakfast.map(str::to_string), lunch.map(str::to_string))
    }

    fn date(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    fn page(content_type: &str, body: &str) -> FetchedPage {
        FetchedPage {
            status: 200,
            content_type: Some(content_type.to_string()),
            body: body.to_string(),
        }
    }

    fn serve(fetcher: &mut MockPageFetcher, url: &'static str, page: FetchedPage) {
        fetcher
            .expect_fetch()
            .withf(move |u| u == url)
            .returning(move |_| Box::pin(ready(Ok(page.clone()))));
    }

    fn unreachable_source(fetcher: &mut MockPageFetcher) {
        fetcher.expect_fetch().returning(|url| {
            let error = CoreError::ExternalServiceError(format!("no route to {url}"));
            Box::pin(ready(Err(error)))
        });
    }

    #[tokio::test]
    async fn test_get_menu_serves_cache_first() {
        let mut mocks = Mocks::default();
        mocks
            .menus
            .expect_get_menu_for_date()
            .withf(|d| *d == date("2025-09-05"))
            .returning(|_| Box::pin(ready(Ok(Some(entry(Some("Toast"), None))))));
        mocks.fetcher.expect_fetch().never();
        let service = mocks.into_service(config(None));

        let lookup = service.get_menu(date("2025-09-05")).await.unwrap();

        assert_eq!(lookup.source, MenuSourceKind::Cache);
        assert_eq!(lookup.entry.breakfast.as_deref(), Some("Toast"));
    }

    #[tokio::test]
    async fn test_get_menu_scrapes_and_caches_on_miss() {
        let mut mocks = Mocks::default();
        mocks
            .menus
            .expect_get_menu_for_date()
            .returning(|_| Box::pin(ready(Ok(Some(MenuEntry::default())))));
        mocks
            .menus
            .expect_save_menu_for_date()
            .withf(|d, e| *d == date("2025-09-05") && *e == entry(None, Some("Pizza")))
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok(()))));
        serve(
            &mut mocks.fetcher,
            SOURCE,
            page("text/html", "<p>Lunch: Pizza</p>"),
        );
        let service = mocks.into_service(config(None));

        let lookup = service.get_menu(date("2025-09-05")).await.unwrap();

        assert_eq!(lookup.source, MenuSourceKind::Scraped);
        assert_eq!(lookup.entry, entry(None, Some("Pizza")));
    }

    #[tokio::test]
    async fn test_get_menu_falls_back_to_month_scrape() {
        let mut mocks = Mocks::default();

        let mut lookups = 0;
        mocks
            .menus
            .expect_get_menu_for_date()
            .times(2)
            .returning(move |_| {
                lookups += 1;
                let stored = (lookups > 1).then(|| entry(Some("Eggs"), None));
                Box::pin(ready(Ok(stored)))
            });
        mocks
            .menus
            .expect_save_menu_for_date()
            .times(2)
            .returning(|_, _| Box::pin(ready(Ok(()))));

        // The day lookup finds the source down; the month pass a moment later does not.
        let mut source_calls = 0;
        mocks
            .fetcher
            .expect_fetch()
            .withf(|u| u == SOURCE)
            .times(2)
            .returning(move |_| {
                source_calls += 1;
                if source_calls == 1 {
                    let error = CoreError::ExternalServiceError("timeout".to_string());
                    return Box::pin(ready(Err(error)));
                }
                let html = r#"<script src="/menus/2025-09.json"></script>"#;
                Box::pin(ready(Ok(page("text/html", html))))
            });
        serve(
            &mut mocks.fetcher,
            "https://menus.example.org/menus/2025-09.json",
            page(
                "application/json",
                r#"[["9/2", "Lunch: Chili"], ["9/5", "Breakfast: Eggs"]]"#,
            ),
        );
        let service = mocks.into_service(config(None));

        let lookup = service.get_menu(date("2025-09-05")).await.unwrap();

        assert_eq!(lookup.source, MenuSourceKind::ScrapedMonth);
        assert_eq!(lookup.entry, entry(Some("Eggs"), None));
    }

    #[tokio::test]
    async fn test_get_menu_without_any_source_reports_none() {
        let mut mocks = Mocks::default();
        mocks
            .menus
            .expect_get_menu_for_date()
            .returning(|_| Box::pin(ready(Ok(None))));
        mocks.menus.expect_save_menu_for_date().never();
        unreachable_source(&mut mocks.fetcher);
        let service = mocks.into_service(config(None));

        let lookup = service.get_menu(date("2025-09-05")).await.unwrap();

        assert_eq!(lookup, MenuLookup::empty(date("2025-09-05")));
    }

    #[tokio::test]
    async fn test_save_menu_checks_pin() {
        let mut mocks = Mocks::default();
        mocks
            .menus
            .expect_save_menu_for_date()
            .withf(|d, e| *d == date("2025-09-05") && *e == entry(Some("Toast"), None))
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok(()))));
        let service = mocks.into_service(config(Some("4321")));

        let denied = service
            .save_menu(SaveMenuInput {
                date: date("2025-09-05"),
                breakfast: Some("Toast".to_string()),
                lunch: None,
                pin: Some("0000".to_string()),
            })
            .await;
        assert_eq!(denied, Err(CoreError::Unauthorized));

        let saved = service
            .save_menu(SaveMenuInput {
                date: date("2025-09-05"),
                breakfast: Some("Toast".to_string()),
                lunch: Some("".to_string()),
                pin: Some("4321".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(saved, entry(Some("Toast"), None));
    }

    #[tokio::test]
    async fn test_ingest_month_saves_every_found_day() {
        let mut mocks = Mocks::default();
        serve(
            &mut mocks.fetcher,
            SOURCE,
            page("text/html", r#"<script src="/menus/2025-09.json"></script>"#),
        );
        serve(
            &mut mocks.fetcher,
            "https://menus.example.org/menus/2025-09.json",
            page(
                "application/json",
                r#"[["9/2", "Lunch: Chili"], ["9/4", "Breakfast: Eggs"]]"#,
            ),
        );
        mocks
            .menus
            .expect_save_menu_for_date()
            .withf(|d, _| *d == date("2025-09-02") || *d == date("2025-09-04"))
            .times(2)
            .returning(|_, _| Box::pin(ready(Ok(()))));
        let service = mocks.into_service(config(None));

        let outcome = service.ingest_month("2025-09".parse().unwrap()).await.unwrap();

        assert_eq!(outcome.saved, 2);
    }

    #[tokio::test]
    async fn test_ingest_text_merges_through_the_repository() {
        let mut mocks = Mocks::default();
        mocks.menus.expect_get_menu_for_date().never();
        mocks.menus.expect_save_menu_for_date().never();
        mocks
            .menus
            .expect_merge_menu_for_date()
            .withf(|d, e| *d == date("2025-09-01") && *e == entry(Some("Bagel"), None))
            .times(1)
            .returning(|_, update| {
                let stored = entry(None, Some("Meat: Burger | Vegetarian: None | Deli: None"));
                Box::pin(ready(Ok(stored.merge(update))))
            });
        let service = mocks.into_service(config(None));

        let outcome = service
            .ingest_text(
                "September 2025 Breakfast Menu\nMonday, September 1 Menu:\nBagel\n".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, IngestTextOutcome { saved: 1, dates: 1 });
    }

    #[tokio::test]
    async fn test_ingest_text_without_month_fails() {
        let mut mocks = Mocks::default();
        mocks.menus.expect_merge_menu_for_date().never();
        let service = mocks.into_service(config(None));

        let result = service.ingest_text("Option 1 - Meat".to_string()).await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}

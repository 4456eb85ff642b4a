use std::{
    collections::{BTreeMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::MenuEntry,
        extraction::{
            date_tokens::build_date_tokens,
            line_extractor::{FieldSlots, extract_from_lines, find_date_anchor},
            patterns::{FieldPattern, MenuField, builtin_regex, compile_patterns},
            text::{FlattenError, flatten_to_lines, normalize_text},
        },
        ports::PageFetcher,
        value_objects::{DateKey, MonthKey},
    },
};

static JSON_CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    builtin_regex(r#"(?i)(https?://[^"'\s>]+\.json)|((?:/[^"'\s>]+)\.json)"#)
});

/// Patterns tried directly against the source HTML when no JSON candidate helps.
pub const HTML_FALLBACK_PATTERNS: &[FieldPattern] = &[
    FieldPattern {
        field: MenuField::Breakfast,
        pattern: r"(?i)breakfast[^<>{}\n\r\t]*[:\-]\s*([^<>{}\n\r]+)",
    },
    FieldPattern {
        field: MenuField::Lunch,
        pattern: r"(?i)\blunch[^<>{}\n\r\t]*[:\-]\s*([^<>{}\n\r]+)",
    },
];

static COMPILED_HTML_PATTERNS: LazyLock<Vec<(MenuField, Regex)>> =
    LazyLock::new(|| compile_patterns(HTML_FALLBACK_PATTERNS));

#[derive(Debug, Error)]
enum CandidateError {
    #[error("fetch failed: {0}")]
    Fetch(CoreError),

    #[error("content type {0:?} is not JSON")]
    NotJson(Option<String>),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Flatten(#[from] FlattenError),
}

/// `.json` URLs referenced by the page, de-duplicated in discovery order and
/// resolved against the page URL.
pub fn find_json_candidates(html: &str, source_url: &str) -> Vec<Url> {
    let base = match Url::parse(source_url) {
        Ok(base) => base,
        Err(e) => {
            warn!("menu source url {} is not absolute: {}", source_url, e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    JSON_CANDIDATE_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .filter(|raw| seen.insert(*raw))
        .filter_map(|raw| base.join(raw).ok())
        .collect()
}

/// Last-resort scan of the raw page for labelled breakfast/lunch text.
pub fn extract_from_html(html: &str) -> Option<MenuEntry> {
    let mut found = FieldSlots::default();

    for (field, regex) in COMPILED_HTML_PATTERNS.iter() {
        *found.slot_mut(*field) = regex
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| normalize_text(m.as_str()))
            .filter(|value| !value.is_empty());
    }

    found.into_entry()
}

async fn fetch_candidate_lines<F: PageFetcher>(
    fetcher: &F,
    url: &Url,
) -> Result<Vec<String>, CandidateError> {
    let page = fetcher
        .fetch(url.as_str())
        .await
        .map_err(CandidateError::Fetch)?;

    if !page.is_json() {
        return Err(CandidateError::NotJson(page.content_type));
    }

    let document: serde_json::Value = serde_json::from_str(&page.body)?;
    Ok(flatten_to_lines(&document)?)
}

async fn fetch_source<F: PageFetcher>(fetcher: &F, source_url: &str) -> Option<String> {
    match fetcher.fetch(source_url).await {
        Ok(page) => {
            if !(200..300).contains(&page.status) {
                debug!("menu source answered with status {}", page.status);
            }
            Some(page.body)
        }
        Err(e) => {
            warn!("failed to fetch menu source {}: {}", source_url, e);
            None
        }
    }
}

/// Best-effort menu for one date. Never fails: any upstream problem yields `None`.
pub async fn scrape_for_date<F: PageFetcher>(
    fetcher: &F,
    source_url: &str,
    date: DateKey,
) -> Option<MenuEntry> {
    let html = fetch_source(fetcher, source_url).await?;
    let tokens = build_date_tokens(date);

    for candidate in find_json_candidates(&html, source_url) {
        match fetch_candidate_lines(fetcher, &candidate).await {
            Ok(lines) => {
                if let Some(entry) = extract_from_lines(&tokens, &lines) {
                    debug!(%date, %candidate, "menu found in json candidate");
                    return Some(entry);
                }
            }
            Err(e) => debug!(%candidate, "skipping menu candidate: {}", e),
        }
    }

    let entry = extract_from_html(&html);
    if entry.is_some() {
        debug!(%date, "menu found in source html");
    }
    entry
}

/// Best-effort menus for every day of a month, fetching each document once.
///
/// Only days whose date appears somewhere in the combined lines are
/// extracted; the rest are absent from the result.
pub async fn scrape_for_month<F: PageFetcher>(
    fetcher: &F,
    source_url: &str,
    month: MonthKey,
) -> BTreeMap<DateKey, MenuEntry> {
    let mut results = BTreeMap::new();

    let Some(html) = fetch_source(fetcher, source_url).await else {
        return results;
    };

    let mut lines = Vec::new();
    for candidate in find_json_candidates(&html, source_url) {
        match fetch_candidate_lines(fetcher, &candidate).await {
            Ok(candidate_lines) => lines.extend(candidate_lines),
            Err(e) => debug!(%candidate, "skipping menu candidate: {}", e),
        }
    }

    for date in month.days() {
        let tokens = build_date_tokens(date);
        if find_date_anchor(&tokens, &lines).is_none() {
            continue;
        }
        if let Some(entry) = extract_from_lines(&tokens, &lines) {
            results.insert(date, entry);
        }
    }

    debug!(%month, days = results.len(), "month scrape finished");
    results
}

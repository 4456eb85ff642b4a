//! Best-effort menu extraction from scraped pages and pasted text.

pub mod date_tokens;
pub mod ingest;
pub mod line_extractor;
pub mod patterns;
pub mod scraper;
pub mod text;

pub use date_tokens::build_date_tokens;
pub use ingest::parse_menu_text;
pub use line_extractor::extract_from_lines;
pub use scraper::{scrape_for_date, scrape_for_month};
pub use text::{flatten_strings, normalize_text};

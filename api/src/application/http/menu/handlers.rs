pub mod get_menu;
pub mod ingest_month;
pub mod ingest_text;
pub mod save_menu;

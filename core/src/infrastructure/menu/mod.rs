pub mod repositories;

pub use repositories::{FileMenuRepository, PostgresMenuRepository};

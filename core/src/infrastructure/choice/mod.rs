pub mod repositories;

pub use repositories::{FileChoiceRepository, PostgresChoiceRepository};

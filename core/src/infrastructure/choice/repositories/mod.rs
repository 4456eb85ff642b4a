pub mod file_choice_repository;
pub mod postgres_choice_repository;

pub use file_choice_repository::FileChoiceRepository;
pub use postgres_choice_repository::PostgresChoiceRepository;

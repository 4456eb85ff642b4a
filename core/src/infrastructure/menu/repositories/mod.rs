pub mod file_menu_repository;
pub mod postgres_menu_repository;

pub use file_menu_repository::FileMenuRepository;
pub use postgres_menu_repository::PostgresMenuRepository;

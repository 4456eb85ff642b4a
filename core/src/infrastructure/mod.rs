pub mod choice;
pub mod db;
pub mod file;
pub mod health;
pub mod http;
pub mod menu;
pub mod store;
pub mod student;

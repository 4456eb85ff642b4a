pub mod choice;
pub mod common;
pub mod health;
pub mod menu;
pub mod student;

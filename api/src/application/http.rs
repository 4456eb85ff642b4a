pub mod choice;
pub mod health;
pub mod menu;
pub mod server;
pub mod student;

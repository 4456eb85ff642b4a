pub mod repositories;

pub use repositories::{FileStudentRepository, PostgresStudentRepository};

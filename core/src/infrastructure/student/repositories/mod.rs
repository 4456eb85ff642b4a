pub mod file_student_repository;
pub mod postgres_student_repository;

pub use file_student_repository::FileStudentRepository;
pub use postgres_student_repository::PostgresStudentRepository;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    student::{entities::SEED_STUDENTS, ports::StudentRepository},
};

const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id SERIAL PRIMARY KEY,
        first_name TEXT UNIQUE NOT NULL
    )
"#;

fn storage_error(context: &str, e: sea_orm::DbErr) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::StorageError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct PostgresStudentRepository {
    pub db: DatabaseConnection,
}

impl PostgresStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the `students` table and seeds it while it is empty.
    pub async fn ensure_schema(&self) -> Result<(), CoreError> {
        self.db
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                CREATE_STUDENTS_TABLE,
            ))
            .await
            .map_err(|e| storage_error("Failed to create students table", e))?;

        let row = self
            .db
            .query_one(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT COUNT(*)::bigint AS count FROM students",
            ))
            .await
            .map_err(|e| storage_error("Failed to count students", e))?;
        let count: i64 = match row {
            Some(row) => row
                .try_get("", "count")
                .map_err(|e| storage_error("Failed to read student count", e))?,
            None => 0,
        };
        if count > 0 {
            return Ok(());
        }

        info!("seeding students table");
        for name in SEED_STUDENTS {
            self.db
                .execute(Statement::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    "INSERT INTO students (first_name) VALUES ($1) ON CONFLICT (first_name) DO NOTHING",
                    [name.into()],
                ))
                .await
                .map_err(|e| storage_error("Failed to seed students", e))?;
        }

        Ok(())
    }
}

impl StudentRepository for PostgresStudentRepository {
    async fn list_students(&self) -> Result<Vec<String>, CoreError> {
        let rows = self
            .db
            .query_all(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT first_name FROM students ORDER BY first_name ASC",
            ))
            .await
            .map_err(|e| storage_error("Failed to list students", e))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String>("", "first_name")
                    .map_err(|e| storage_error("Failed to read first_name column", e))
            })
            .collect()
    }
}

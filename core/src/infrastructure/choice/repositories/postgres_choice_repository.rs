use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};
use tracing::error;

use crate::domain::{
    choice::{
        entities::{Choice, StudentChoice},
        ports::ChoiceRepository,
    },
    common::entities::app_errors::CoreError,
    menu::value_objects::DateKey,
};

const CREATE_CHOICES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS choices (
        id SERIAL PRIMARY KEY,
        choice_date DATE NOT NULL,
        student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
        snack TEXT NOT NULL,
        lunch TEXT NOT NULL,
        school_option TEXT,
        milk BOOLEAN NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        UNIQUE (choice_date, student_id)
    )
"#;

fn storage_error(context: &str, e: sea_orm::DbErr) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::StorageError(e.to_string())
}

fn student_choice_from_row(row: &QueryResult) -> Result<StudentChoice, CoreError> {
    let read_error = |e| storage_error("Failed to read choice row", e);

    Ok(StudentChoice {
        student: row.try_get("", "student").map_err(read_error)?,
        snack: row.try_get("", "snack").map_err(read_error)?,
        lunch: row.try_get("", "lunch").map_err(read_error)?,
        school_lunch_option: row.try_get("", "school_option").map_err(read_error)?,
        milk: row.try_get("", "milk").map_err(read_error)?,
    })
}

#[derive(Debug, Clone)]
pub struct PostgresChoiceRepository {
    pub db: DatabaseConnection,
}

impl PostgresChoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the `choices` table; `students` must exist first.
    pub async fn ensure_schema(&self) -> Result<(), CoreError> {
        self.db
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                CREATE_CHOICES_TABLE,
            ))
            .await
            .map_err(|e| storage_error("Failed to create choices table", e))?;

        Ok(())
    }
}

impl ChoiceRepository for PostgresChoiceRepository {
    async fn get_choices_for_date(&self, date: DateKey) -> Result<Vec<StudentChoice>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT s.first_name AS student, c.snack, c.lunch, c.school_option, c.milk
            FROM students s
            LEFT JOIN choices c
                ON c.student_id = s.id AND c.choice_date = $1::date
            ORDER BY s.first_name ASC
            "#,
            [date.to_string().into()],
        );

        let rows = self
            .db
            .query_all(stmt)
            .await
            .map_err(|e| storage_error("Failed to load choices", e))?;

        rows.iter().map(student_choice_from_row).collect()
    }

    async fn save_choice(
        &self,
        date: DateKey,
        student: String,
        choice: Choice,
    ) -> Result<(), CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            WITH student AS (
                INSERT INTO students (first_name) VALUES ($2)
                ON CONFLICT (first_name) DO UPDATE SET first_name = EXCLUDED.first_name
                RETURNING id
            )
            INSERT INTO choices (choice_date, student_id, snack, lunch, school_option, milk, updated_at)
            SELECT $1::date, student.id, $3, $4, $5, $6, now() FROM student
            ON CONFLICT (choice_date, student_id) DO UPDATE
            SET snack = EXCLUDED.snack,
                lunch = EXCLUDED.lunch,
                school_option = EXCLUDED.school_option,
                milk = EXCLUDED.milk,
                updated_at = now()
            "#,
            [
                date.to_string().into(),
                student.into(),
                choice.snack.into(),
                choice.lunch.into(),
                choice.school_lunch_option.into(),
                choice.milk.into(),
            ],
        );

        self.db.execute(stmt).await.map_err(|e| {
            error!("Failed to save choice for {}: {}", date, e);
            CoreError::StorageError(e.to_string())
        })?;

        Ok(())
    }
}

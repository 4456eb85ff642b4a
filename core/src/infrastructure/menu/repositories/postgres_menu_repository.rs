use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::MenuEntry, ports::MenuRepository, value_objects::DateKey},
};

const CREATE_MENUS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS menus (
        menu_date DATE PRIMARY KEY,
        breakfast TEXT,
        lunch TEXT,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

#[derive(Debug, Clone)]
pub struct PostgresMenuRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ensure_schema(&self) -> Result<(), CoreError> {
        self.db
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                CREATE_MENUS_TABLE,
            ))
            .await
            .map_err(|e| {
                error!("Failed to create menus table: {}", e);
                CoreError::StorageError(e.to_string())
            })?;

        Ok(())
    }

    pub async fn ping(&self) -> Result<(), CoreError> {
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::StorageError(e.to_string())
        })
    }
}

fn menu_from_row(row: &QueryResult) -> Result<MenuEntry, CoreError> {
    let breakfast: Option<String> = row.try_get("", "breakfast").map_err(|e| {
        error!("Failed to read breakfast column: {}", e);
        CoreError::StorageError(e.to_string())
    })?;
    let lunch: Option<String> = row.try_get("", "lunch").map_err(|e| {
        error!("Failed to read lunch column: {}", e);
        CoreError::StorageError(e.to_string())
    })?;

    Ok(MenuEntry::new(breakfast, lunch))
}

impl MenuRepository for PostgresMenuRepository {
    async fn get_menu_for_date(&self, date: DateKey) -> Result<Option<MenuEntry>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT breakfast, lunch
            FROM menus
            WHERE menu_date = $1::date
            "#,
            [date.to_string().into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to load menu for {}: {}", date, e);
            CoreError::StorageError(e.to_string())
        })?;

        row.as_ref().map(menu_from_row).transpose()
    }

    async fn save_menu_for_date(&self, date: DateKey, entry: MenuEntry) -> Result<(), CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO menus (menu_date, breakfast, lunch, updated_at)
            VALUES ($1::date, $2, $3, now())
            ON CONFLICT (menu_date) DO UPDATE
            SET breakfast = EXCLUDED.breakfast,
                lunch = EXCLUDED.lunch,
                updated_at = now()
            "#,
            [
                date.to_string().into(),
                entry.breakfast.into(),
                entry.lunch.into(),
            ],
        );

        self.db.execute(stmt).await.map_err(|e| {
            error!("Failed to save menu for {}: {}", date, e);
            CoreError::StorageError(e.to_string())
        })?;

        Ok(())
    }

    async fn merge_menu_for_date(
        &self,
        date: DateKey,
        entry: MenuEntry,
    ) -> Result<MenuEntry, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO menus (menu_date, breakfast, lunch, updated_at)
            VALUES ($1::date, $2, $3, now())
            ON CONFLICT (menu_date) DO UPDATE
            SET breakfast = COALESCE(EXCLUDED.breakfast, menus.breakfast),
                lunch = COALESCE(EXCLUDED.lunch, menus.lunch),
                updated_at = now()
            RETURNING breakfast, lunch
            "#,
            [
                date.to_string().into(),
                entry.breakfast.into(),
                entry.lunch.into(),
            ],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to merge menu for {}: {}", date, e);
            CoreError::StorageError(e.to_string())
        })?;

        match row {
            Some(row) => menu_from_row(&row),
            None => {
                error!("Merging menu for {} returned no row", date);
                Err(CoreError::InternalServerError)
            }
        }
    }
}

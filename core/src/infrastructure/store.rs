use tracing::info;

use crate::{
    domain::{
        choice::{
            entities::{Choice, StudentChoice},
            ports::ChoiceRepository,
        },
        common::{StorageConfig, entities::app_errors::CoreError},
        menu::{entities::MenuEntry, ports::MenuRepository, value_objects::DateKey},
        student::ports::StudentRepository,
    },
    infrastructure::{
        choice::{FileChoiceRepository, PostgresChoiceRepository},
        db::postgres::{Postgres, PostgresConfig},
        file::JsonFileStore,
        menu::{FileMenuRepository, PostgresMenuRepository},
        student::{FileStudentRepository, PostgresStudentRepository},
    },
};

/// Every repository of the storage backend picked at startup.
#[derive(Debug, Clone)]
pub enum Store {
    Postgres {
        menus: PostgresMenuRepository,
        students: PostgresStudentRepository,
        choices: PostgresChoiceRepository,
    },
    File {
        files: JsonFileStore,
        menus: FileMenuRepository,
        students: FileStudentRepository,
        choices: FileChoiceRepository,
    },
}

impl Store {
    pub async fn connect(config: &StorageConfig) -> Result<Self, CoreError> {
        match config {
            StorageConfig::Postgres { database_url } => {
                let postgres = Postgres::new(PostgresConfig {
                    database_url: database_url.clone(),
                })
                .await?;

                let menus = PostgresMenuRepository::new(postgres.get_db());
                let students = PostgresStudentRepository::new(postgres.get_db());
                let choices = PostgresChoiceRepository::new(postgres.get_db());
                menus.ensure_schema().await?;
                students.ensure_schema().await?;
                choices.ensure_schema().await?;

                Ok(Store::Postgres {
                    menus,
                    students,
                    choices,
                })
            }
            StorageConfig::File { data_dir } => {
                info!("storing data under {}", data_dir.display());
                let files = JsonFileStore::new(data_dir.clone());
                let students = FileStudentRepository::new(files.clone());
                students.ensure_seeded().await?;

                Ok(Store::File {
                    menus: FileMenuRepository::new(files.clone()),
                    choices: FileChoiceRepository::new(files.clone()),
                    students,
                    files,
                })
            }
        }
    }
}

impl MenuRepository for Store {
    async fn get_menu_for_date(&self, date: DateKey) -> Result<Option<MenuEntry>, CoreError> {
        match self {
            Store::Postgres { menus, .. } => menus.get_menu_for_date(date).await,
            Store::File { menus, .. } => menus.get_menu_for_date(date).await,
        }
    }

    async fn save_menu_for_date(&self, date: DateKey, entry: MenuEntry) -> Result<(), CoreError> {
        match self {
            Store::Postgres { menus, .. } => menus.save_menu_for_date(date, entry).await,
            Store::File { menus, .. } => menus.save_menu_for_date(date, entry).await,
        }
    }

    async fn merge_menu_for_date(
        &self,
        date: DateKey,
        entry: MenuEntry,
    ) -> Result<MenuEntry, CoreError> {
        match self {
            Store::Postgres { menus, .. } => menus.merge_menu_for_date(date, entry).await,
            Store::File { menus, .. } => menus.merge_menu_for_date(date, entry).await,
        }
    }
}

impl StudentRepository for Store {
    async fn list_students(&self) -> Result<Vec<String>, CoreError> {
        match self {
            Store::Postgres { students, .. } => students.list_students().await,
            Store::File { students, .. } => students.list_students().await,
        }
    }
}

impl ChoiceRepository for Store {
    async fn get_choices_for_date(&self, date: DateKey) -> Result<Vec<StudentChoice>, CoreError> {
        match self {
            Store::Postgres { choices, .. } => choices.get_choices_for_date(date).await,
            Store::File { choices, .. } => choices.get_choices_for_date(date).await,
        }
    }

    async fn save_choice(
        &self,
        date: DateKey,
        student: String,
        choice: Choice,
    ) -> Result<(), CoreError> {
        match self {
            Store::Postgres { choices, .. } => choices.save_choice(date, student, choice).await,
            Store::File { choices, .. } => choices.save_choice(date, student, choice).await,
        }
    }
}

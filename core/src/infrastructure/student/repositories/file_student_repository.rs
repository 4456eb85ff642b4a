use tracing::info;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        student::{entities::seed_roster, ports::StudentRepository},
    },
    infrastructure::file::JsonFileStore,
};

pub(crate) const STUDENTS_FILE: &str = "students.json";

/// Stored roster, or the seed roster while none is stored. Callers hold the store lock.
pub(crate) async fn read_roster(files: &JsonFileStore) -> Vec<String> {
    files
        .read::<Vec<String>>(STUDENTS_FILE)
        .await
        .filter(|students| !students.is_empty())
        .unwrap_or_else(seed_roster)
}

/// Roster kept as a JSON array of first names in `students.json`.
#[derive(Debug, Clone)]
pub struct FileStudentRepository {
    files: JsonFileStore,
}

impl FileStudentRepository {
    pub fn new(files: JsonFileStore) -> Self {
        Self { files }
    }

    /// Writes the seed roster when no usable roster is stored.
    pub async fn ensure_seeded(&self) -> Result<(), CoreError> {
        let _guard = self.files.lock().await;
        let stored: Option<Vec<String>> = self.files.read_for_update(STUDENTS_FILE).await?;
        if stored.is_some_and(|students| !students.is_empty()) {
            return Ok(());
        }

        info!("seeding {}", self.files.path(STUDENTS_FILE).display());
        self.files.write(STUDENTS_FILE, &seed_roster()).await
    }
}

impl StudentRepository for FileStudentRepository {
    async fn list_students(&self) -> Result<Vec<String>, CoreError> {
        let _guard = self.files.lock().await;
        Ok(read_roster(&self.files).await)
    }
}

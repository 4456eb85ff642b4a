use crate::{
    domain::{common::entities::app_errors::CoreError, health::ports::HealthCheckRepository},
    infrastructure::store::Store,
};

impl HealthCheckRepository for Store {
    fn backend(&self) -> &'static str {
        match self {
            Store::Postgres { .. } => "postgres",
            Store::File { .. } => "file",
        }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        match self {
            Store::Postgres { menus, .. } => menus.ping().await,
            Store::File { files, .. } => files.ping().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{common::StorageConfig, student::ports::StudentRepository};

    #[tokio::test]
    async fn test_file_store_reports_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::connect(&StorageConfig::File {
            data_dir: dir.path().join("data"),
        })
        .await
        .unwrap();

        assert_eq!(store.backend(), "file");
        assert!(store.ping().await.is_ok());
        assert!(dir.path().join("data").is_dir());
        assert!(dir.path().join("data/students.json").is_file());
        assert_eq!(store.list_students().await.unwrap().len(), 20);
    }
}

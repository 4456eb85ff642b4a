use crate::domain::{
    choice::ports::ChoiceRepository,
    common::{services::Service, today_in},
    health::{
        entities::HealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    menu::{
        ports::{MenuRepository, PageFetcher},
        value_objects::DateKey,
    },
    student::ports::StudentRepository,
};

impl<M, S, C, F, HC> HealthCheckService for Service<M, S, C, F, HC>
where
    M: MenuRepository,
    S: StudentRepository,
    C: ChoiceRepository,
    F: PageFetcher,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> HealthStatus {
        let backend = self.health_check_repository.backend();
        let date_key = DateKey::from(today_in(self.config.school_timezone)).to_string();

        let error = match self.health_check_repository.ping().await {
            Ok(()) => None,
            Err(e) => {
                tracing::error!(backend, "storage ping failed: {}", e);
                Some(e.to_string())
            }
        };

        HealthStatus {
            backend: backend.to_string(),
            env_detected: backend == "postgres",
            date_key,
            ok: error.is_none(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::common::{
        MenuConfig, entities::app_errors::CoreError, services::mocks::Mocks,
    };

    #[tokio::test]
    async fn test_failed_ping_is_reported() {
        let mut mocks = Mocks::default();
        mocks.health.expect_backend().return_const("postgres");
        mocks.health.expect_ping().times(1).returning(|| {
            Box::pin(ready(Err(CoreError::StorageError(
                "connection refused".to_string(),
            ))))
        });
        let service = mocks.into_service(MenuConfig::default());

        let status = service.health().await;

        assert!(!status.ok);
        assert!(status.env_detected);
        assert_eq!(status.backend, "postgres");
        assert_eq!(status.date_key.len(), 10);
        assert_eq!(
            status.error.as_deref(),
            Some("Storage error: connection refused")
        );
    }

    #[tokio::test]
    async fn test_healthy_file_backend() {
        let mut mocks = Mocks::default();
        mocks.health.expect_backend().return_const("file");
        mocks
            .health
            .expect_ping()
            .returning(|| Box::pin(ready(Ok(()))));
        let service = mocks.into_service(MenuConfig::default());

        let status = service.health().await;

        assert!(status.ok);
        assert!(!status.env_detected);
        assert_eq!(status.error, None);
    }
}

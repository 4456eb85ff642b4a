use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::HealthStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Short backend name, `postgres` or `file`.
    fn backend(&self) -> &'static str;

    fn ping(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = HealthStatus> + Send;
}

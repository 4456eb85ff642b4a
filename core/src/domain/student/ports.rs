use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Repository trait for the student roster
#[cfg_attr(test, mockall::automock)]
pub trait StudentRepository: Send + Sync {
    fn list_students(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

pub trait StudentService: Send + Sync {
    /// Student first names, never empty
    fn get_students(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

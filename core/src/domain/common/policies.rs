use crate::domain::common::entities::app_errors::CoreError;

/// Turns a policy decision into `CoreError::Unauthorized` when it denies access.
pub fn ensure_policy(allowed: bool, reason: &str) -> Result<(), CoreError> {
    if allowed {
        return Ok(());
    }

    tracing::warn!("policy denied: {}", reason);
    Err(CoreError::Unauthorized)
}

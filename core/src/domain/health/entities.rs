use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage backend report returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub backend: String,
    pub env_detected: bool,
    pub date_key: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

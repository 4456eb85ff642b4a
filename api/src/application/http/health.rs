use axum::{Router, extract::State, routing::get};
use lunchbox_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};
use utoipa::OpenApi;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Storage health",
    description = "Reports the storage backend, whether a database URL was configured, today's date key in the school time zone and a storage ping.",
    responses(
        (status = 200, body = HealthStatus),
        (status = 500, body = HealthStatus, description = "Storage ping failed")
    )
)]
pub async fn health(State(state): State<AppState>) -> Response<HealthStatus> {
    let status = state.service.health().await;

    if status.ok {
        Response::OK(status)
    } else {
        Response::InternalServerError(status)
    }
}

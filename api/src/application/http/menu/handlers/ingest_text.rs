use axum::extract::State;
use lunchbox_core::domain::menu::{ports::MenuService, value_objects::IngestTextOutcome};

use crate::application::http::{
    menu::validators::IngestTextValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/ingest-text",
    tag = "menu",
    summary = "Ingest a pasted menu",
    description = "Parses a pasted monthly breakfast or lunch menu and merges every day into the stored menus.",
    request_body = IngestTextValidator,
    responses(
        (status = 200, body = IngestTextOutcome),
        (status = 400, description = "Missing text or no month header")
    )
)]
pub async fn ingest_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IngestTextValidator>,
) -> Result<Response<IngestTextOutcome>, ApiError> {
    let outcome = state
        .service
        .ingest_text(payload.text)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}

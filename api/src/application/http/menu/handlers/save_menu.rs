use axum::extract::State;
use lunchbox_core::domain::menu::{
    ports::MenuService,
    value_objects::{DateKey, SaveMenuInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu::validators::SaveMenuValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveMenuResponse {
    pub ok: bool,
}

#[utoipa::path(
    post,
    path = "",
    tag = "menu",
    summary = "Save a menu by hand",
    description = "Stores breakfast and lunch for a day. Empty strings clear a field. Requires the admin PIN when one is configured.",
    request_body = SaveMenuValidator,
    responses(
        (status = 200, body = SaveMenuResponse),
        (status = 400, description = "Missing or malformed date"),
        (status = 401, description = "Admin PIN mismatch")
    )
)]
pub async fn save_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveMenuValidator>,
) -> Result<Response<SaveMenuResponse>, ApiError> {
    let date = payload.date.parse::<DateKey>().map_err(ApiError::from)?;

    state
        .service
        .save_menu(SaveMenuInput {
            date,
            breakfast: payload.breakfast,
            lunch: payload.lunch,
            pin: payload.pin,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveMenuResponse { ok: true }))
}

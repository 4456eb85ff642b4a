use axum::extract::State;
use lunchbox_core::domain::{
    choice::{ports::ChoiceService, value_objects::SaveChoiceInput},
    menu::value_objects::DateKey,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    choice::validators::SaveChoiceValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveChoiceResponse {
    pub ok: bool,
}

#[utoipa::path(
    post,
    path = "",
    tag = "choices",
    summary = "Submit a student's choice",
    description = "Stores snack, lunch and milk for a student and day, replacing any earlier submission. A school lunch option is required when lunch is `School lunch`.",
    request_body = SaveChoiceValidator,
    responses(
        (status = 200, body = SaveChoiceResponse),
        (status = 400, description = "Missing fields, malformed date or missing school lunch option")
    )
)]
pub async fn save_choice(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveChoiceValidator>,
) -> Result<Response<SaveChoiceResponse>, ApiError> {
    let date = payload.date.parse::<DateKey>().map_err(ApiError::from)?;
    let milk = payload
        .milk
        .ok_or_else(|| ApiError::ValidationError("Missing required fields".to_string()))?;

    state
        .service
        .save_choice(SaveChoiceInput {
            date,
            student: payload.student,
            snack: payload.snack,
            lunch: payload.lunch,
            school_lunch_option: payload.school_lunch_option,
            milk,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveChoiceResponse { ok: true }))
}

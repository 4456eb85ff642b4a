use axum::extract::{Query, State};
use lunchbox_core::domain::{
    choice::{entities::StudentChoice, ports::ChoiceService, value_objects::DayChoices},
    menu::value_objects::DateKey,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetChoicesQuery {
    /// Day to list, `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetChoicesResponse {
    pub date: String,
    pub choices: Vec<StudentChoice>,
}

impl From<DayChoices> for GetChoicesResponse {
    fn from(day: DayChoices) -> Self {
        Self {
            date: day.date.to_string(),
            choices: day.choices,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "choices",
    summary = "Choices for a day",
    description = "Every student on the roster with the choice submitted for the date, or null fields when none was.",
    params(GetChoicesQuery),
    responses(
        (status = 200, body = GetChoicesResponse),
        (status = 400, description = "Missing or malformed date")
    )
)]
pub async fn get_choices(
    State(state): State<AppState>,
    Query(query): Query<GetChoicesQuery>,
) -> Result<Response<GetChoicesResponse>, ApiError> {
    let date = query
        .date
        .filter(|date| !date.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing date".to_string()))?
        .parse::<DateKey>()
        .map_err(ApiError::from)?;

    let day = state.service.get_choices(date).await.map_err(|e| {
        tracing::error!("Failed to load choices for {}: {}", date, e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetChoicesResponse::from(day)))
}

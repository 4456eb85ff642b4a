use axum::extract::{Query, State};
use lunchbox_core::domain::menu::{
    entities::{MenuLookup, MenuSourceKind},
    ports::MenuService,
    value_objects::DateKey,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetMenuQuery {
    /// Day to look up, `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuResponse {
    pub date: String,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub source: MenuSourceKind,
}

impl From<MenuLookup> for GetMenuResponse {
    fn from(lookup: MenuLookup) -> Self {
        Self {
            date: lookup.date.to_string(),
            breakfast: lookup.entry.breakfast,
            lunch: lookup.entry.lunch,
            source: lookup.source,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu",
    summary = "Get the menu for a day",
    description = "Returns the cached menu for the date, scraping the menu source when nothing is cached yet.",
    params(GetMenuQuery),
    responses(
        (status = 200, body = GetMenuResponse),
        (status = 400, description = "Missing or malformed date")
    )
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Query(query): Query<GetMenuQuery>,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let date = query
        .date
        .ok_or_else(|| ApiError::BadRequest("date is required (YYYY-MM-DD)".to_string()))?
        .parse::<DateKey>()
        .map_err(ApiError::from)?;

    let lookup = state.service.get_menu(date).await.map_err(|e| {
        tracing::error!("Failed to get menu for {}: {}", date, e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetMenuResponse::from(lookup)))
}

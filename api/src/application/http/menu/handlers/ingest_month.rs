use axum::extract::{Query, State};
use lunchbox_core::domain::menu::{
    ports::MenuService,
    value_objects::{IngestMonthOutcome, MonthKey},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngestMonthQuery {
    /// Month to scrape, `YYYY-MM`; defaults to the current school month
    pub month: Option<String>,
}

#[utoipa::path(
    post,
    path = "/ingest",
    tag = "menu",
    summary = "Scrape a whole month",
    description = "Scrapes the menu source once and caches every day of the month it finds.",
    params(IngestMonthQuery),
    responses(
        (status = 200, body = IngestMonthOutcome),
        (status = 400, description = "Malformed month")
    )
)]
pub async fn ingest_month(
    State(state): State<AppState>,
    Query(query): Query<IngestMonthQuery>,
) -> Result<Response<IngestMonthOutcome>, ApiError> {
    let month = match query.month.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse::<MonthKey>().map_err(ApiError::from)?,
        _ => state.service.current_month(),
    };

    let outcome = state.service.ingest_month(month).await.map_err(|e| {
        tracing::error!("Failed to ingest month {}: {}", month, e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(outcome))
}

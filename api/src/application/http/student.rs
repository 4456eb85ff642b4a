use axum::{Router, extract::State, routing::get};
use lunchbox_core::domain::student::ports::StudentService;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(get_students))]
pub struct StudentApiDoc;

pub fn student_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/students", root_path), get(get_students))
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetStudentsResponse {
    pub students: Vec<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "students",
    summary = "List students",
    description = "Student first names. A seed roster is served until storage holds students of its own.",
    responses(
        (status = 200, body = GetStudentsResponse),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<Response<GetStudentsResponse>, ApiError> {
    let students = state.service.get_students().await.map_err(|e| {
        tracing::error!("Failed to list students: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetStudentsResponse { students }))
}

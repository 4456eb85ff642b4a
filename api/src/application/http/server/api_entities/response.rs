use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
    InternalServerError(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::InternalServerError(data) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(data)).into_response()
            }
        }
    }
}

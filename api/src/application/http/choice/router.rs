use super::handlers::{
    get_choices::{__path_get_choices, get_choices},
    save_choice::{__path_save_choice, save_choice},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_choices, save_choice))]
pub struct ChoiceApiDoc;

pub fn choice_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/choices", state.args.server.root_path),
        get(get_choices).post(save_choice),
    )
}

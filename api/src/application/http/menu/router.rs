use super::handlers::{
    get_menu::{__path_get_menu, get_menu},
    ingest_month::{__path_ingest_month, ingest_month},
    ingest_text::{__path_ingest_text, ingest_text},
    save_menu::{__path_save_menu, save_menu},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_menu, save_menu, ingest_month, ingest_text))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menu", state.args.server.root_path),
            get(get_menu).post(save_menu),
        )
        .route(
            &format!("{}/menu/ingest", state.args.server.root_path),
            post(ingest_month),
        )
        .route(
            &format!("{}/menu/ingest-text", state.args.server.root_path),
            post(ingest_text),
        )
}

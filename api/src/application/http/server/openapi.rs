use utoipa::OpenApi;

use crate::application::http::{
    choice::router::ChoiceApiDoc, health::HealthApiDoc, menu::router::MenuApiDoc,
    student::StudentApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lunchbox API"
    ),
    nest(
        (path = "/menu", api = MenuApiDoc),
        (path = "/students", api = StudentApiDoc),
        (path = "/choices", api = ChoiceApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

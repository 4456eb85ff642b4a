use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveChoiceValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "2025-09-05")]
    pub date: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub student: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub snack: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "School lunch")]
    pub lunch: String,

    /// Required when `lunch` is `School lunch`, ignored otherwise
    #[serde(default)]
    pub school_lunch_option: Option<String>,

    #[serde(default)]
    #[validate(required(message = "Missing required fields"))]
    pub milk: Option<bool>,
}

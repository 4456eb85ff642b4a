use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveMenuValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "date is required"))]
    #[schema(example = "2025-09-05")]
    pub date: String,

    #[serde(default)]
    pub breakfast: Option<String>,

    #[serde(default)]
    pub lunch: Option<String>,

    #[serde(default)]
    pub pin: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct IngestTextValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

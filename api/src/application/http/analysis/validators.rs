use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text must be between 1 and 5000 characters"
    ))]
    pub text: String,
    /// Overrides the server's Gemini key for this request.
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct IngredientTextRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text must be between 1 and 5000 characters"
    ))]
    pub text: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProxyAnalyzeRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text must be between 1 and 5000 characters"
    ))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "question must be between 1 and 2000 characters"
    ))]
    pub question: String,
    /// Usually the analysis result the user is asking about.
    #[schema(value_type = Option<Object>)]
    pub context: Option<serde_json::Value>,
}

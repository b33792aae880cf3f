use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AskInput {
    pub question: String,
    /// Typically a finished `AnalysisResult`, forwarded verbatim into the prompt.
    pub context: Option<serde_json::Value>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatAnswer {
    pub content: String,
}

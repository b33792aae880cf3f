use labelscan_core::domain::ingredient_analysis::helpers::analyze_with_rules;

use crate::application::http::{
    analysis::{handlers::analyze_text::AnalyzeResponse, validators::IngredientTextRequest},
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse, ValidateJson},
        response::Response,
    },
};

/// Offline analysis: keyword rules, no model call.
#[utoipa::path(
    post,
    path = "/rules",
    tag = "analysis",
    summary = "Analyze an ingredient list with the local rule engine",
    responses(
        (status = 200, body = AnalyzeResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = IngredientTextRequest
)]
pub async fn analyze_rules(
    ValidateJson(payload): ValidateJson<IngredientTextRequest>,
) -> Result<Response<AnalyzeResponse>, ApiError> {
    Ok(Response::OK(AnalyzeResponse {
        data: analyze_with_rules(&payload.text),
    }))
}

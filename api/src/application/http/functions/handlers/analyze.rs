use axum::extract::State;
use labelscan_core::domain::ingredient_analysis::{
    AnalysisResult, IngredientAnalysisService, ProxyAnalyzeInput,
};

use crate::application::http::{
    functions::validators::ProxyAnalyzeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Server-side analysis for clients that hold no key. Uses the server's key only,
/// and recomputes score, flags and summary from the returned breakdown.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "functions",
    summary = "Server-side ingredient analysis",
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = ProxyAnalyzeRequest
)]
pub async fn proxy_analyze(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProxyAnalyzeRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .proxy_analyze(ProxyAnalyzeInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}

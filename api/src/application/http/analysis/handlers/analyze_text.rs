use axum::extract::State;
use labelscan_core::domain::ingredient_analysis::{
    AnalysisResult, AnalyzeIngredientsInput, IngredientAnalysisService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub data: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "",
    tag = "analysis",
    summary = "Analyze an ingredient list",
    description = "Classifies every ingredient with the hosted model. A configured proxy is tried first.",
    responses(
        (status = 200, body = AnalyzeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalyzeResponse>, ApiError> {
    let result = state
        .service
        .analyze_ingredients(AnalyzeIngredientsInput {
            text: payload.text,
            api_key: payload.api_key,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeResponse { data: result }))
}

use axum::extract::State;
use labelscan_core::domain::{
    allergen::detect_allergens,
    diet::check_diet_compatibility,
    ingredient_analysis::{AnalyzeIngredientsInput, IngredientAnalysisService},
    scan::{ScanReport, ScanSource},
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
pub struct ScanResponse {
    pub data: ScanReport,
}

/// Runs the model analysis and the local side analyses concurrently, then assembles one report.
pub async fn build_report(
    state: &AppState,
    source: ScanSource,
    text: String,
    api_key: Option<String>,
) -> Result<ScanReport, ApiError> {
    let side_text = text.clone();
    let (analysis, (allergens, diets)) = tokio::join!(
        state.service.analyze_ingredients(AnalyzeIngredientsInput {
            text: text.clone(),
            api_key,
        }),
        async {
            (
                detect_allergens(&side_text),
                check_diet_compatibility(&side_text),
            )
        }
    );

    let analysis = analysis.map_err(ApiError::from)?;

    Ok(ScanReport::assemble(
        source, text, analysis, allergens, diets,
    ))
}

#[utoipa::path(
    post,
    path = "/scan",
    tag = "analysis",
    summary = "Full scan of an ingredient list",
    description = "Model analysis plus allergen and diet checks in one report",
    responses(
        (status = 200, body = ScanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn scan_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<ScanResponse>, ApiError> {
    let report = build_report(&state, ScanSource::Text, payload.text, payload.api_key).await?;

    Ok(Response::OK(ScanResponse { data: report }))
}

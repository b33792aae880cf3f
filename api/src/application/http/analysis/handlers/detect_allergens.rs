use labelscan_core::domain::allergen::{AllergenInfo, detect_allergens as detect};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::IngredientTextRequest,
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectAllergensResponse {
    pub data: Vec<AllergenInfo>,
}

#[utoipa::path(
    post,
    path = "/allergens",
    tag = "analysis",
    summary = "Detect common allergens in an ingredient list",
    responses(
        (status = 200, body = DetectAllergensResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = IngredientTextRequest
)]
pub async fn detect_allergens(
    ValidateJson(payload): ValidateJson<IngredientTextRequest>,
) -> Result<Response<DetectAllergensResponse>, ApiError> {
    Ok(Response::OK(DetectAllergensResponse {
        data: detect(&payload.text),
    }))
}

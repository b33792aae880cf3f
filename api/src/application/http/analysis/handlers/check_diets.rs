use labelscan_core::domain::diet::{DietCompatibility, check_diet_compatibility};
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
pub struct CheckDietsResponse {
    pub data: Vec<DietCompatibility>,
}

#[utoipa::path(
    post,
    path = "/diets",
    tag = "analysis",
    summary = "Check an ingredient list against the supported diets",
    responses(
        (status = 200, body = CheckDietsResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = IngredientTextRequest
)]
pub async fn check_diets(
    ValidateJson(payload): ValidateJson<IngredientTextRequest>,
) -> Result<Response<CheckDietsResponse>, ApiError> {
    Ok(Response::OK(CheckDietsResponse {
        data: check_diet_compatibility(&payload.text),
    }))
}

use axum::extract::State;
use labelscan_core::domain::chat::{AskInput, ChatAnswer, ChatService};

use crate::application::http::{
    functions::validators::ChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "functions",
    summary = "Ask the nutrition assistant a question",
    responses(
        (status = 200, body = ChatAnswer),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = ChatRequest
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatAnswer>, ApiError> {
    let answer = state
        .service
        .ask(AskInput {
            question: payload.question,
            context: payload.context,
            api_key: None,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(answer))
}

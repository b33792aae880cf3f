use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ConfigResponse {
    pub model: String,
    pub proxy_enabled: bool,
    pub server_key_configured: bool,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public service configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    let config = &state.service.config;

    Response::OK(ConfigResponse {
        model: config.llm.gemini_model.clone(),
        proxy_enabled: config
            .proxy
            .analyze_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty()),
        server_key_configured: config.llm.gemini_api_key.is_some(),
    })
}

use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze::{__path_proxy_analyze, proxy_analyze},
    chat::{__path_chat, chat},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(proxy_analyze, chat))]
pub struct FunctionsApiDoc;

pub fn functions_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/functions/v1/analyze", state.args.server.root_path),
            post(proxy_analyze),
        )
        .route(
            &format!("{}/functions/v1/chat", state.args.server.root_path),
            post(chat),
        )
}

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze_rules::{__path_analyze_rules, analyze_rules},
    analyze_text::{__path_analyze_text, analyze_text},
    check_diets::{__path_check_diets, check_diets},
    detect_allergens::{__path_detect_allergens, detect_allergens},
    scan_image::{__path_scan_image, MAX_IMAGE_SIZE, scan_image},
    scan_text::{__path_scan_text, scan_text},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_text,
    analyze_rules,
    detect_allergens,
    check_diets,
    scan_text,
    scan_image
))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/analysis", root_path), post(analyze_text))
        .route(&format!("{}/analysis/rules", root_path), post(analyze_rules))
        .route(
            &format!("{}/analysis/allergens", root_path),
            post(detect_allergens),
        )
        .route(&format!("{}/analysis/diets", root_path), post(check_diets))
        .route(&format!("{}/analysis/scan", root_path), post(scan_text))
        .route(
            &format!("{}/analysis/scan/image", root_path),
            // multipart framing on top of the image itself
            post(scan_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
}

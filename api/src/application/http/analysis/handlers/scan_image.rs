use axum::extract::{Multipart, State};
use labelscan_core::domain::{
    scan::ScanSource,
    text_extraction::{ExtractTextInput, TextExtractionService},
};

use crate::application::http::{
    analysis::handlers::scan_text::{ScanResponse, build_report},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/scan/image",
    tag = "analysis",
    summary = "Full scan of a label photo",
    description = "Multipart form with an `image` file and an optional `api_key` field. The label text is read by the vision model, then scanned like `/scan`.",
    responses(
        (status = 200, body = ScanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn scan_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanResponse>, ApiError> {
    let mut api_key: Option<String> = None;
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "api_key" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read api_key: {}", e)))?;
                api_key = Some(value);
            }
            "image" => {
                let mime_type = field.content_type().unwrap_or("image/jpeg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some((data.to_vec(), mime_type));
            }
            _ => {}
        }
    }

    let (image_data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let text = state
        .service
        .extract_text(ExtractTextInput {
            image_data,
            mime_type,
            api_key: api_key.clone(),
        })
        .await
        .map_err(ApiError::from)?;

    let report = build_report(&state, ScanSource::Image, text, api_key).await?;

    Ok(Response::OK(ScanResponse { data: report }))
}

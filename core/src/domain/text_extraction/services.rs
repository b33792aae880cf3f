use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient_analysis::{
        ports::{AnalysisProxy, LLMClient},
        prompts::text_extraction_prompt,
        value_objects::GenerationSettings,
    },
    text_extraction::{ports::TextExtractionService, value_objects::ExtractTextInput},
};

/// Collapses every whitespace run into one space and trims the ends.
pub fn normalize_extracted_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl<LLM, PX> TextExtractionService for Service<LLM, PX>
where
    LLM: LLMClient,
    PX: AnalysisProxy,
{
    #[instrument(skip(self, input), fields(image_size = input.image_data.len(), mime_type = %input.mime_type))]
    async fn extract_text(&self, input: ExtractTextInput) -> Result<String, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("Image payload is empty".to_string()));
        }

        let api_key = self
            .resolve_api_key(input.api_key)
            .ok_or(CoreError::MissingApiKey)?;

        let raw = self
            .llm_client
            .generate_with_image(
                api_key,
                text_extraction_prompt(),
                input.image_data,
                input.mime_type,
                GenerationSettings::text_extraction(),
            )
            .await?;

        let text = normalize_extracted_text(&raw);
        if text.is_empty() {
            tracing::warn!("Text extraction returned no text");
            return Err(CoreError::NoTextFound);
        }

        Ok(text)
    }
}

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    ingredient_analysis::{ports::LLMClient, value_objects::GenerationSettings},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    base_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    max_output_tokens: u32,
}

impl From<GenerationSettings> for GenerationConfig {
    fn from(settings: GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_k: settings.top_k,
            top_p: settings.top_p,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(base_url: String, model_name: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> Self {
        Self::new(config.gemini_base_url.clone(), config.gemini_model.clone())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    async fn call_gemini_api(
        &self,
        api_key: &str,
        request: GeminiRequest,
    ) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // reqwest embeds the URL (and thus the key) in its Display output.
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        first_candidate_text(gemini_response)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn first_candidate_text(response: GeminiResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        api_key: String,
        prompt: String,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: settings.into(),
        };

        self.call_gemini_api(&api_key, request).await
    }

    async fn generate_with_image(
        &self,
        api_key: String,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: settings.into(),
        };

        self.call_gemini_api(&api_key, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_generation_config_in_camel_case() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GenerationSettings::proxy_classification().into(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(json["generationConfig"]["topK"], 1);
    }

    #[test]
    fn test_optional_sampling_fields_are_omitted() {
        let config: GenerationConfig = GenerationSettings::classification().into();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("topK").is_none());
        assert!(json.get("topP").is_none());
        assert_eq!(json["maxOutputTokens"], 4096);
    }

    #[test]
    fn test_first_candidate_text() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"health_score\":1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            first_candidate_text(response).as_deref(),
            Some("{\"health_score\":1}")
        );

        let empty: GeminiResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(first_candidate_text(empty).is_none());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiLLMClient::new(
            "https://generativelanguage.googleapis.com/".to_string(),
            "gemini-2.0-flash-exp".to_string(),
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }
}

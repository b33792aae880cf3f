use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient_analysis::{
        entities::AnalysisResult,
        helpers::require_ingredients,
        parsing::{parse_analysis_response, post_process_proxy_payload},
        ports::{AnalysisProxy, IngredientAnalysisService, LLMClient},
        prompts::{build_classification_prompt, build_proxy_prompt},
        value_objects::{AnalyzeIngredientsInput, GenerationSettings, ProxyAnalyzeInput},
    },
};

impl<LLM, PX> IngredientAnalysisService for Service<LLM, PX>
where
    LLM: LLMClient,
    PX: AnalysisProxy,
{
    #[instrument(skip(self, input), fields(text_len = input.text.len()))]
    async fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> Result<AnalysisResult, CoreError> {
        // 1. Tokenize
        let ingredients = require_ingredients(&input.text)?;
        let joined = ingredients.join(", ");

        // 2. Resolve credential (only required once the proxy has failed)
        let api_key = self.resolve_api_key(input.api_key);

        // 3. Server-side proxy
        if let Some(result) = self.try_proxy(&joined).await {
            return Ok(result);
        }

        let api_key = api_key.ok_or_else(|| {
            tracing::error!("No API key available and proxy analysis unavailable");
            CoreError::MissingApiKey
        })?;

        // 4. Direct call to the hosted model
        let raw_response = self
            .llm_client
            .generate_with_text(
                api_key,
                build_classification_prompt(&joined),
                GenerationSettings::classification(),
            )
            .await?;

        // 5. Parse, validate and backfill
        parse_analysis_response(&raw_response).inspect_err(|e| {
            tracing::error!("Invalid analysis response from LLM: {}", e);
        })
    }

    #[instrument(skip(self, input), fields(text_len = input.text.len()))]
    async fn proxy_analyze(&self, input: ProxyAnalyzeInput) -> Result<AnalysisResult, CoreError> {
        require_ingredients(&input.text)?;
        let text = input.text.trim();

        let api_key = self.resolve_api_key(None).ok_or_else(|| {
            tracing::error!("Proxy analysis requested but no server API key is configured");
            CoreError::MissingApiKey
        })?;

        let raw_response = self
            .llm_client
            .generate_with_text(
                api_key,
                build_proxy_prompt(text),
                GenerationSettings::proxy_classification(),
            )
            .await?;

        post_process_proxy_payload(&raw_response).inspect_err(|e| {
            tracing::error!("Invalid proxy analysis response from LLM: {}", e);
        })
    }
}

impl<LLM, PX> Service<LLM, PX>
where
    LLM: LLMClient,
    PX: AnalysisProxy,
{
    /// Returns a validated result from the proxy, or `None` so the caller tries the direct path.
    async fn try_proxy(&self, text: &str) -> Option<AnalysisResult> {
        if !self.analysis_proxy.is_enabled() {
            return None;
        }

        let body = match self.analysis_proxy.analyze(text.to_string()).await {
            Ok(body) => body,
            Err(e) => {
                debug!("Proxy analysis failed, falling back to direct call: {}", e);
                return None;
            }
        };

        match parse_analysis_response(&body) {
            Ok(result) => Some(result),
            Err(e) => {
                debug!("Proxy returned an unusable body, falling back to direct call: {}", e);
                None
            }
        }
    }
}

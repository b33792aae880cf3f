use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient_analysis::{
        entities::AnalysisResult,
        value_objects::{AnalyzeIngredientsInput, GenerationSettings, ProxyAnalyzeInput},
    },
};

/// LLM Client trait for calling the hosted generative model.
///
/// The credential is passed per call; adapters hold no key of their own.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        api_key: String,
        prompt: String,
        settings: GenerationSettings,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        api_key: String,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        settings: GenerationSettings,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Server-side classification proxy.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisProxy: Send + Sync {
    /// Whether a proxy endpoint is configured at all.
    fn is_enabled(&self) -> bool;

    /// Posts `{ "text": ... }` and returns the raw body of a successful response.
    fn analyze(&self, text: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for ingredient classification
#[cfg_attr(test, mockall::automock)]
pub trait IngredientAnalysisService: Send + Sync {
    /// Proxy first, then the hosted model directly. Never falls back to the rule engine.
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    /// Server-side proxy behaviour: server credential, locally recomputed score.
    fn proxy_analyze(
        &self,
        input: ProxyAnalyzeInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}

use crate::domain::{
    common::LabelscanConfig,
    ingredient_analysis::ports::{AnalysisProxy, LLMClient},
};

/// Aggregate holding every adapter the domain services need.
///
/// The service traits (`IngredientAnalysisService`, `ChatService`,
/// `TextExtractionService`) are implemented on this type in their own modules.
#[derive(Clone)]
pub struct Service<LLM, PX> {
    pub llm_client: LLM,
    pub analysis_proxy: PX,
    pub config: LabelscanConfig,
}

impl<LLM, PX> Service<LLM, PX>
where
    LLM: LLMClient,
    PX: AnalysisProxy,
{
    pub fn new(llm_client: LLM, analysis_proxy: PX, config: LabelscanConfig) -> Self {
        Self {
            llm_client,
            analysis_proxy,
            config,
        }
    }

    /// Picks the request-supplied key when it is non-blank, else the configured default.
    pub fn resolve_api_key(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.config
                    .llm
                    .gemini_api_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
            })
    }
}

use crate::{
    domain::common::{LabelscanConfig, services::Service},
    infrastructure::{llm::GeminiLLMClient, proxy::HttpAnalysisProxy},
};

pub type LabelscanService = Service<GeminiLLMClient, HttpAnalysisProxy>;

pub fn create_service(config: LabelscanConfig) -> LabelscanService {
    let llm_client = GeminiLLMClient::from_config(&config.llm);
    let analysis_proxy = HttpAnalysisProxy::from_config(&config.proxy);

    tracing::info!(
        model = %config.llm.gemini_model,
        proxy_enabled = analysis_proxy_enabled(&config),
        server_key_configured = config.llm.gemini_api_key.is_some(),
        "ingredient analysis service configured"
    );

    Service::new(llm_client, analysis_proxy, config)
}

fn analysis_proxy_enabled(config: &LabelscanConfig) -> bool {
    config
        .proxy
        .analyze_url
        .as_deref()
        .is_some_and(|url| !url.trim().is_empty())
}

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::domain::{
    common::{LLMConfig, LabelscanConfig, ProxyConfig, entities::app_errors::CoreError},
    ingredient_analysis::{
        ports::{AnalysisProxy, LLMClient},
        value_objects::GenerationSettings,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub api_key: String,
    pub prompt: String,
    pub settings: GenerationSettings,
    pub image: Option<(Vec<u8>, String)>,
}

/// Scripted `LLMClient` returning the same response for every call.
#[derive(Clone)]
pub struct FakeLlm {
    response: Result<String, CoreError>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeLlm {
    pub fn replying(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing(error: CoreError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl LLMClient for FakeLlm {
    async fn generate_with_text(
        &self,
        api_key: String,
        prompt: String,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key,
            prompt,
            settings,
            image: None,
        });
        self.response.clone()
    }

    async fn generate_with_image(
        &self,
        api_key: String,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        settings: GenerationSettings,
    ) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key,
            prompt,
            settings,
            image: Some((image_data, mime_type)),
        });
        self.response.clone()
    }
}

/// Scripted `AnalysisProxy`; `disabled()` behaves like an unconfigured proxy URL.
#[derive(Clone)]
pub struct FakeProxy {
    enabled: bool,
    response: Result<String, CoreError>,
    calls: Arc<AtomicUsize>,
}

impl FakeProxy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            response: Err(CoreError::ExternalServiceError("proxy disabled".to_string())),
            calls: Arc::default(),
        }
    }

    pub fn replying(body: &str) -> Self {
        Self {
            enabled: true,
            response: Ok(body.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            enabled: true,
            response: Err(CoreError::ExternalServiceError(
                "proxy returned 503 Service Unavailable".to_string(),
            )),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnalysisProxy for FakeProxy {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn analyze(&self, _text: String) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

pub fn config_with_key(api_key: Option<&str>) -> LabelscanConfig {
    LabelscanConfig {
        llm: LLMConfig {
            gemini_api_key: api_key.map(String::from),
            ..LLMConfig::default()
        },
        proxy: ProxyConfig::default(),
    }
}

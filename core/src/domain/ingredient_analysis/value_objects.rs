#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub text: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProxyAnalyzeInput {
    pub text: String,
}

/// Sampling parameters forwarded to the hosted model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_k: Option<u32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: u32,
}

impl GenerationSettings {
    /// Direct-path classification.
    pub fn classification() -> Self {
        Self {
            temperature: 0.1,
            top_k: None,
            top_p: None,
            max_output_tokens: 4096,
        }
    }

    /// Classification issued by the server-side proxy.
    pub fn proxy_classification() -> Self {
        Self {
            temperature: 0.1,
            top_k: Some(1),
            top_p: Some(1.0),
            max_output_tokens: 2048,
        }
    }

    pub fn chat() -> Self {
        Self {
            temperature: 0.7,
            top_k: Some(40),
            top_p: Some(0.95),
            max_output_tokens: 1024,
        }
    }

    pub fn text_extraction() -> Self {
        Self {
            temperature: 0.0,
            top_k: None,
            top_p: None,
            max_output_tokens: 2048,
        }
    }
}

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
#[cfg(test)]
pub mod fakes;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct LabelscanConfig {
    pub llm: LLMConfig,
    pub proxy: ProxyConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash-exp".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProxyConfig {
    /// Full URL of the server-side analyze endpoint. `None` disables the proxy path.
    pub analyze_url: Option<String>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

use reqwest::Client;
use serde::Serialize;

use crate::domain::{
    common::{ProxyConfig, entities::app_errors::CoreError},
    ingredient_analysis::ports::AnalysisProxy,
};

/// HTTP client for the server-side analyze endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalysisProxy {
    analyze_url: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    text: &'a str,
}

impl HttpAnalysisProxy {
    pub fn new(analyze_url: Option<String>) -> Self {
        Self {
            analyze_url: analyze_url.filter(|url| !url.trim().is_empty()),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &ProxyConfig) -> Self {
        Self::new(config.analyze_url.clone())
    }
}

impl AnalysisProxy for HttpAnalysisProxy {
    fn is_enabled(&self) -> bool {
        self.analyze_url.is_some()
    }

    async fn analyze(&self, text: String) -> Result<String, CoreError> {
        let url = self.analyze_url.as_deref().ok_or_else(|| {
            CoreError::ExternalServiceError("analysis proxy is not configured".to_string())
        })?;

        let response = self
            .client
            .post(url)
            .json(&ProxyRequest { text: &text })
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("proxy request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::ExternalServiceError(format!(
                "proxy returned {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("proxy body unreadable: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_disables_proxy() {
        assert!(!HttpAnalysisProxy::new(None).is_enabled());
        assert!(!HttpAnalysisProxy::new(Some("  ".to_string())).is_enabled());
        assert!(
            HttpAnalysisProxy::new(Some("http://localhost:3333/functions/v1/analyze".to_string()))
                .is_enabled()
        );
    }

    #[tokio::test]
    async fn test_disabled_proxy_errors_without_network() {
        let err = HttpAnalysisProxy::new(None)
            .analyze("salt".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}

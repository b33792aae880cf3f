use clap::Parser;
use labelscan_core::domain::common::{LLMConfig, LabelscanConfig, ProxyConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "labelscan", version, about = "Ingredient label analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub proxy: ProxyArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Server-side default key, also used by the proxy and chat endpoints.
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash-exp")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProxyArgs {
    /// URL of an upstream server-side analyze endpoint tried before the direct model call.
    #[arg(long = "analyze-proxy-url", env = "ANALYZE_PROXY_URL")]
    pub analyze_proxy_url: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<Args> for LabelscanConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: non_blank(args.llm.gemini_api_key),
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            proxy: ProxyConfig {
                analyze_url: non_blank(args.proxy.analyze_proxy_url),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_become_none() {
        let args = Args::try_parse_from([
            "labelscan",
            "--gemini-api-key=",
            "--analyze-proxy-url=",
        ])
        .unwrap();

        let config = LabelscanConfig::from(args);
        assert!(config.llm.gemini_api_key.is_none());
        assert!(config.proxy.analyze_url.is_none());
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::try_parse_from([
            "labelscan",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }
}

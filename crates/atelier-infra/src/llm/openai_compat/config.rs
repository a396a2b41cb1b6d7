//! Configuration for the OpenAI-compatible chat provider.

use std::time::Duration;

use secrecy::SecretString;

use atelier_observe::genai_attrs::PROVIDER_OPENAI;
use atelier_types::config::AppConfig;

/// Default OpenAI endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible chat provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`]. `Debug` output
/// redacts the API key.
#[derive(Debug)]
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Default model, used when a request leaves its model blank.
    pub model: String,
    /// Upper bound on one completion call.
    pub timeout: Duration,
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: PROVIDER_OPENAI.into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
        timeout: Duration::from_secs(300),
    }
}

/// Configuration derived from the application config file.
pub fn from_app_config(config: &AppConfig, api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        base_url: config.api_base.trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(config.request_timeout_secs),
        ..openai_defaults(api_key, &config.text.model)
    }
}

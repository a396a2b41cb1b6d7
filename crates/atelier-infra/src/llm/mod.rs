//! Text provider implementations.
//!
//! Contains the concrete [`LlmProvider`](atelier_core::llm::provider::LlmProvider)
//! for OpenAI-compatible chat APIs and a factory that builds it from
//! [`AppConfig`].

pub mod openai_compat;

use secrecy::SecretString;

use atelier_core::llm::box_provider::BoxLlmProvider;
use atelier_types::config::AppConfig;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create the wardrobe-plan provider for the configured endpoint.
pub fn create_text_provider(config: &AppConfig, api_key: SecretString) -> BoxLlmProvider {
    let provider =
        OpenAiCompatibleProvider::new(openai_compat::config::from_app_config(config, api_key));
    BoxLlmProvider::new(provider)
}

//! Application state wiring the pipeline to its providers.
//!
//! AppState holds the configuration and the single
//! [`RecommendationAssembler`] used by both CLI commands and REST API
//! handlers. Nothing in it changes after startup.

use std::path::Path;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use atelier_core::assembler::pipeline::RecommendationAssembler;
use atelier_core::image::box_provider::BoxImageProvider;
use atelier_core::llm::box_provider::BoxLlmProvider;
use atelier_infra::config::load_app_config;
use atelier_infra::image::create_image_provider;
use atelier_infra::llm::create_text_provider;
use atelier_infra::secret::env::{load_api_key, API_KEY_VAR};
use atelier_types::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<RecommendationAssembler>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Load configuration and the API key, then build the OpenAI providers.
    ///
    /// Fails when the API key is missing, before anything is served.
    pub async fn init(config_path: &Path) -> anyhow::Result<Self> {
        let config = load_app_config(config_path).await;
        let api_key = load_api_key(API_KEY_VAR)?;

        let text = create_text_provider(
            &config,
            SecretString::from(api_key.expose_secret().to_string()),
        );
        let image = create_image_provider(&config, api_key);

        tracing::info!(
            text_model = %config.text.model,
            image_model = %config.image.model,
            api_base = %config.api_base,
            "providers configured"
        );

        Ok(Self::new(config, text, image))
    }

    /// Assemble state from already-built providers.
    pub fn new(config: AppConfig, text: BoxLlmProvider, image: BoxImageProvider) -> Self {
        let assembler = RecommendationAssembler::new(text, image, &config);
        Self {
            assembler: Arc::new(assembler),
            config: Arc::new(config),
        }
    }
}

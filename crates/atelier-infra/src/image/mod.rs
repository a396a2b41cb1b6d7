//! Image provider implementations.
//!
//! Contains the concrete [`ImageProvider`](atelier_core::image::provider::ImageProvider)
//! for the OpenAI Images API and a factory that builds it from [`AppConfig`].

pub mod openai;
pub mod types;

use std::time::Duration;

use secrecy::SecretString;

use atelier_core::image::box_provider::BoxImageProvider;
use atelier_types::config::AppConfig;

use self::openai::OpenAiImageProvider;

/// Create the closet-preview provider for the configured endpoint.
pub fn create_image_provider(config: &AppConfig, api_key: SecretString) -> BoxImageProvider {
    let provider = OpenAiImageProvider::new(
        api_key,
        Duration::from_secs(config.request_timeout_secs),
    )
    .with_base_url(config.api_base.clone());
    BoxImageProvider::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_image_provider() {
        let provider = create_image_provider(
            &AppConfig::default(),
            SecretString::from("sk-test".to_string()),
        );
        assert_eq!(provider.name(), "openai");
    }
}

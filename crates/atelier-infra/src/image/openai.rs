//! OpenAiImageProvider -- concrete [`ImageProvider`] for the OpenAI Images API.
//!
//! Sends one `POST {base_url}/images/generations` per call and returns the
//! first image in the response. The API key is wrapped in
//! [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use atelier_core::image::provider::ImageProvider;
use atelier_observe::genai_attrs::{OP_GENERATE_IMAGE, PROVIDER_OPENAI};
use atelier_types::image::{ImageError, ImageRequest, ImageResult};

use super::types::{ErrorEnvelope, GenerationRequest, GenerationResponse};

/// OpenAI-compatible image generation provider.
pub struct OpenAiImageProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiImageProvider {
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ImageProvider for OpenAiImageProvider {
    fn name(&self) -> &str {
        PROVIDER_OPENAI
    }

    async fn generate(&self, request: &ImageRequest) -> Result<ImageResult, ImageError> {
        let body = GenerationRequest {
            model: &request.model,
            prompt: &request.prompt,
            n: 1,
            size: request.size,
            quality: request.quality,
            style: request.style,
        };
        tracing::debug!(
            gen_ai.operation.name = OP_GENERATE_IMAGE,
            gen_ai.request.model = %request.model,
            prompt_chars = request.prompt.len(),
            "sending image request"
        );

        let response = self
            .client
            .post(self.url("/images/generations"))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status.as_u16(), &error_body));
        }

        let parsed: GenerationResponse = response
            .json()
            .await
            .map_err(|e| ImageError::Deserialization(format!("failed to parse response: {e}")))?;

        let image = parsed
            .data
            .into_iter()
            .next()
            .ok_or(ImageError::EmptyResponse)?;
        if image.url.is_none() && image.b64_json.is_none() {
            return Err(ImageError::EmptyResponse);
        }

        Ok(ImageResult {
            url: image.url,
            b64_json: image.b64_json,
            revised_prompt: image.revised_prompt,
        })
    }
}

/// Map a non-2xx response to an [`ImageError`].
fn map_error_status(status: u16, body: &str) -> ImageError {
    let api_error = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let message = api_error
        .as_ref()
        .map(|e| e.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string());
    let code = api_error
        .as_ref()
        .and_then(|e| e.code.as_deref())
        .unwrap_or("");
    let kind = api_error
        .as_ref()
        .and_then(|e| e.kind.as_deref())
        .unwrap_or("");

    match status {
        401 => ImageError::AuthenticationFailed,
        429 => ImageError::RateLimited,
        400 if code == "content_policy_violation" || kind == "image_generation_user_error" => {
            ImageError::ContentPolicy(message)
        }
        _ => ImageError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

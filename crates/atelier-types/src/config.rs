//! Application configuration types for Atelier.
//!
//! `AppConfig` represents the optional `atelier.toml` that controls which
//! models are called and with what settings. All fields have defaults
//! matching the stock capsule-wardrobe flow.

use serde::{Deserialize, Serialize};

use crate::image::{ImageQuality, ImageSize, ImageStyle};

/// Top-level configuration. The API key is deliberately not part of it;
/// it is read from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// HTTP client timeout for each outbound call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub text: TextModelConfig,

    #[serde(default)]
    pub image: ImageModelConfig,
}

/// Settings for the wardrobe-plan completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextModelConfig {
    #[serde(default = "default_text_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Settings for the closet preview image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageModelConfig {
    #[serde(default = "default_image_model")]
    pub model: String,
    #[serde(default = "default_image_size")]
    pub size: ImageSize,
    #[serde(default = "default_image_quality")]
    pub quality: Option<ImageQuality>,
    #[serde(default = "default_image_style")]
    pub style: Option<ImageStyle>,
    /// How many pieces the image prompt asks for when the text response
    /// yields no numbered items.
    #[serde(default = "default_item_count")]
    pub item_count: usize,
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_text_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.6
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_image_size() -> ImageSize {
    ImageSize::Square
}

fn default_image_quality() -> Option<ImageQuality> {
    Some(ImageQuality::Hd)
}

fn default_image_style() -> Option<ImageStyle> {
    Some(ImageStyle::Natural)
}

fn default_item_count() -> usize {
    8
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_request_timeout_secs(),
            text: TextModelConfig::default(),
            image: ImageModelConfig::default(),
        }
    }
}

impl Default for TextModelConfig {
    fn default() -> Self {
        Self {
            model: default_text_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for ImageModelConfig {
    fn default() -> Self {
        Self {
            model: default_image_model(),
            size: default_image_size(),
            quality: default_image_quality(),
            style: default_image_style(),
            item_count: default_item_count(),
        }
    }
}

//! Image-generation request/response types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output resolution accepted by the image service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1792x1024")]
    Landscape,
    #[serde(rename = "1024x1792")]
    Portrait,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSize::Square => write!(f, "1024x1024"),
            ImageSize::Landscape => write!(f, "1792x1024"),
            ImageSize::Portrait => write!(f, "1024x1792"),
        }
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1024x1024" | "square" => Ok(ImageSize::Square),
            "1792x1024" | "landscape" => Ok(ImageSize::Landscape),
            "1024x1792" | "portrait" => Ok(ImageSize::Portrait),
            other => Err(format!("invalid image size: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Standard,
    Hd,
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageQuality::Standard => write!(f, "standard"),
            ImageQuality::Hd => write!(f, "hd"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Natural,
    Vivid,
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageStyle::Natural => write!(f, "natural"),
            ImageStyle::Vivid => write!(f, "vivid"),
        }
    }
}

/// Request to an image provider for a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub size: ImageSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
}

/// One generated image. Providers return a URL, inline base64, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    /// The prompt as rewritten by the provider, when it reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

impl ImageResult {
    /// Something an `<img src>` can point at: the URL, or a PNG data URI.
    pub fn display_src(&self) -> Option<String> {
        if let Some(url) = &self.url {
            return Some(url.clone());
        }
        self.b64_json
            .as_ref()
            .map(|b64| format!("data:image/png;base64,{b64}"))
    }
}

/// Errors from image provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited or quota exceeded")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("prompt rejected by content policy: {0}")]
    ContentPolicy(String),

    #[error("provider returned no image")]
    EmptyResponse,
}

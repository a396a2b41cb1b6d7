//! Wire types for the OpenAI Images API (`POST /images/generations`).

use serde::{Deserialize, Serialize};

use atelier_types::image::{ImageQuality, ImageSize, ImageStyle};

/// Request body. Exactly one image is requested per call.
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub n: u8,
    pub size: ImageSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedImage {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    pub revised_prompt: Option<String>,
}

/// `{"error": {...}}` body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_api_values() {
        let request = GenerationRequest {
            model: "dall-e-3",
            prompt: "flat lay",
            n: 1,
            size: ImageSize::Square,
            quality: Some(ImageQuality::Hd),
            style: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["size"], "1024x1024");
        assert_eq!(json["quality"], "hd");
        assert_eq!(json["n"], 1);
        assert!(json.get("style").is_none());
    }

    #[test]
    fn test_error_envelope_parses_content_policy() {
        let body = r#"{"error":{"message":"Your request was rejected","type":"invalid_request_error","code":"content_policy_violation"}}"#;
        let parsed: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.code.as_deref(), Some("content_policy_violation"));
        assert_eq!(parsed.error.kind.as_deref(), Some("invalid_request_error"));
    }
}

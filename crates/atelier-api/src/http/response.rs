//! JSON envelope shared by every `/api/v1` route.
//!
//! A recommendation either carries `data` or exactly one entry in `errors`;
//! `meta` is always present:
//! ```json
//! {
//!   "data": { "sections": [...], "image": { "status": "generated", ... } },
//!   "meta": { "request_id": "0192...", "timestamp": "...", "response_time_ms": 8412 },
//!   "_links": { "self": "/api/v1/recommendations" }
//! }
//! ```

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Envelope around a handler payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    pub meta: ApiMeta,

    /// At most one entry; omitted on success.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,

    #[serde(rename = "_links", skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

/// Per-request bookkeeping.
#[derive(Debug, Serialize)]
pub struct ApiMeta {
    pub request_id: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    /// Includes both provider round trips.
    pub response_time_ms: u64,
}

/// One failure reported to the client.
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    /// `VALIDATION_ERROR`, `INVALID_BODY` or `TEXT_SERVICE_ERROR`.
    pub code: String,
    /// Shown verbatim by the form page.
    pub message: String,
    /// Validation errors list the `missing` and `invalid` fields here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// New request identifier (time-ordered UUID v7).
pub fn new_request_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

fn meta(request_id: String, response_time_ms: u64) -> ApiMeta {
    ApiMeta {
        request_id,
        timestamp: chrono::Utc::now().to_rfc3339(),
        response_time_ms,
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, request_id: String, response_time_ms: u64) -> Self {
        Self {
            data: Some(data),
            meta: meta(request_id, response_time_ms),
            errors: Vec::new(),
            links: HashMap::new(),
        }
    }

    pub fn with_link(mut self, rel: &str, href: &str) -> Self {
        self.links.insert(rel.to_string(), href.to_string());
        self
    }
}

impl ApiResponse<()> {
    /// Envelope carrying a single error and no data.
    pub fn error(
        code: &str,
        message: &str,
        request_id: String,
        response_time_ms: u64,
    ) -> Self {
        Self {
            data: None,
            meta: meta(request_id, response_time_ms),
            errors: vec![ApiErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
                details: None,
            }],
            links: HashMap::new(),
        }
    }

    /// Attach structured details to the (single) error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        if let Some(first) = self.errors.first_mut() {
            first.details = Some(details);
        }
        self
    }
}

/// HTTP status for an envelope error code.
pub fn status_for_code(code: &str) -> StatusCode {
    match code {
        "VALIDATION_ERROR" | "INVALID_BODY" => StatusCode::BAD_REQUEST,
        "TEXT_SERVICE_ERROR" => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = match self.errors.first() {
            None => StatusCode::OK,
            Some(err) => status_for_code(&err.code),
        };

        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(serde_json::json!({"ok": true}), "req-1".to_string(), 5)
            .with_link("self", "/api/v1/form/options");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["data"]["ok"], true);
        assert_eq!(json["meta"]["request_id"], "req-1");
        assert_eq!(json["_links"]["self"], "/api/v1/form/options");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_error_envelope_has_one_error() {
        let resp = ApiResponse::error("TEXT_SERVICE_ERROR", "boom", "req-2".to_string(), 1)
            .with_details(serde_json::json!({"provider": "openai"}));
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["errors"][0]["details"]["provider"], "openai");
    }

    #[test]
    fn test_status_for_code() {
        assert_eq!(status_for_code("VALIDATION_ERROR"), StatusCode::BAD_REQUEST);
        assert_eq!(status_for_code("TEXT_SERVICE_ERROR"), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for_code("INTERNAL_ERROR"), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

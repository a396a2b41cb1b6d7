//! Application error type mapping to HTTP status codes and envelope format.

use axum::extract::rejection::JsonRejection;
use serde_json::json;

use atelier_types::error::ValidationError;
use atelier_types::llm::LlmError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The form failed validation; nothing was sent to any service.
    Validation(ValidationError),
    /// The request body was not a readable form.
    InvalidBody(String),
    /// The text service failed; the image service was not called.
    TextService(LlmError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::TextService(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::InvalidBody(e.body_text())
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidBody(_) => "INVALID_BODY",
            AppError::TextService(_) => "TEXT_SERVICE_ERROR",
        }
    }

    /// The single user-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(e) => e.message.clone(),
            AppError::InvalidBody(msg) => format!("Could not read the form: {msg}"),
            AppError::TextService(e) => format!("Error generating recommendations: {e}"),
        }
    }

    /// Error envelope stamped with the request ID the handler logged under.
    pub fn into_envelope(self, request_id: String, response_time_ms: u64) -> ApiResponse<()> {
        let envelope = ApiResponse::error(
            self.code(),
            &self.message(),
            request_id,
            response_time_ms,
        );
        match self {
            AppError::Validation(e) => envelope.with_details(json!({
                "missing": e.missing,
                "invalid": e.invalid,
            })),
            _ => envelope,
        }
    }
}

//! Form metadata handler.

use std::time::Instant;

use axum::Json;

use atelier_types::profile::FormOptions;

use crate::http::response::{new_request_id, ApiResponse};

/// GET /api/v1/form/options - Choices, slider bounds and required fields.
pub async fn get_form_options() -> Json<ApiResponse<FormOptions>> {
    let start = Instant::now();
    let request_id = new_request_id();
    let elapsed = start.elapsed().as_millis() as u64;

    Json(
        ApiResponse::success(FormOptions::current(), request_id, elapsed)
            .with_link("self", "/api/v1/form/options")
            .with_link("submit", "/api/v1/recommendations"),
    )
}

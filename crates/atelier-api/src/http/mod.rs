//! HTTP layer for Atelier.
//!
//! Axum-based JSON API at `/api/v1/` with the envelope response format,
//! plus the embedded single-page form at `/`.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod ui;

//! Shared domain types for Atelier.
//!
//! This crate contains the request-scoped values that flow through the
//! recommendation pipeline: the style profile collected from the form,
//! text/image provider request and response shapes, the sectioned report,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod image;
pub mod llm;
pub mod profile;
pub mod report;

//! Infrastructure layer for Atelier.
//!
//! Contains implementations of the provider traits defined in `atelier-core`
//! (OpenAI-compatible chat and image clients) plus configuration, profile
//! file, and API key loading.

pub mod config;
pub mod image;
pub mod llm;
pub mod secret;

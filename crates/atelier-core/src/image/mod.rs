//! Image-generation provider abstractions, mirroring [`crate::llm`].

pub mod box_provider;
pub mod provider;

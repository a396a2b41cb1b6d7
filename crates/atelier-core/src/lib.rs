//! Recommendation pipeline and provider trait definitions for Atelier.
//!
//! This crate defines the "ports" (text and image provider traits) that the
//! infrastructure layer implements, and the pure pipeline stages that turn
//! a style profile into prompts and a sectioned report. It depends only on
//! `atelier-types` -- never on `atelier-infra` or any HTTP crate.

pub mod assembler;
pub mod image;
pub mod llm;

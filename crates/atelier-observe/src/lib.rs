//! Observability setup for Atelier: subscriber initialization and the
//! GenAI span attribute vocabulary shared by the provider clients.

pub mod genai_attrs;
pub mod tracing_setup;

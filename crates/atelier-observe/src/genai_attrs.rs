//! OpenTelemetry GenAI Semantic Convention attribute values.
//!
//! The provider clients record these as field values on their debug events
//! so text and image calls can be told apart in exported traces.

/// The name of the operation being performed (e.g., "chat").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider (e.g., "openai").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

/// The model ID requested (e.g., "gpt-4-turbo").
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

// --- Operation name values ---

/// Chat completion producing the wardrobe plan.
pub const OP_CHAT: &str = "chat";

/// Image generation producing the closet preview.
pub const OP_GENERATE_IMAGE: &str = "generate_image";

// --- Provider name values ---

/// OpenAI (or any OpenAI-compatible endpoint).
pub const PROVIDER_OPENAI: &str = "openai";

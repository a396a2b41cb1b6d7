//! ImageProvider trait definition.

use atelier_types::image::{ImageError, ImageRequest, ImageResult};

/// Trait for image-generation backends.
///
/// Implementations live in atelier-infra (e.g., `OpenAiImageProvider`).
pub trait ImageProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Generate exactly one image for the request.
    fn generate(
        &self,
        request: &ImageRequest,
    ) -> impl std::future::Future<Output = Result<ImageResult, ImageError>> + Send;
}

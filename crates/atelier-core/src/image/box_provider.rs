//! BoxImageProvider -- object-safe dynamic dispatch wrapper for ImageProvider.
//!
//! Same blanket-impl pattern as [`crate::llm::box_provider`].

use std::future::Future;
use std::pin::Pin;

use atelier_types::image::{ImageError, ImageRequest, ImageResult};

use super::provider::ImageProvider;

/// Object-safe version of [`ImageProvider`] with boxed futures.
pub trait ImageProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ImageResult, ImageError>> + Send + 'a>>;
}

impl<T: ImageProvider> ImageProviderDyn for T {
    fn name(&self) -> &str {
        ImageProvider::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a ImageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ImageResult, ImageError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased image provider.
pub struct BoxImageProvider {
    inner: Box<dyn ImageProviderDyn + Send + Sync>,
}

impl BoxImageProvider {
    pub fn new<T: ImageProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate(&self, request: &ImageRequest) -> Result<ImageResult, ImageError> {
        self.inner.generate_boxed(request).await
    }
}

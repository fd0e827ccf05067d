//! Trait for the generative image API.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A generated image normalized out of the upstream response.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Decoded image bytes.
    pub bytes: Bytes,
    /// Declared MIME type; `image/png` when the upstream omitted one.
    pub mime_type: String,
}

impl GeneratedImage {
    /// Size of the decoded image in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Trait for text-to-image generation backends.
///
/// Implemented by `printworks-imagen`'s `ImagenClient`. No retries:
/// retry policy, if any, belongs to the caller.
#[async_trait]
pub trait ImageGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Generate one image from a prompt.
    async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        model_override: Option<&str>,
    ) -> AppResult<GeneratedImage>;
}

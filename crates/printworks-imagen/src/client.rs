//! Imagen API client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;

use printworks_core::config::imagen::ImagenConfig;
use printworks_core::error::AppError;
use printworks_core::result::AppResult;
use printworks_core::traits::generate::{GeneratedImage, ImageGenerator};

use crate::types::{GenerateConfig, GenerateRequest, GenerateResponse};

/// How much of an upstream error body is kept for diagnostics.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for the Imagen generation endpoint.
pub struct ImagenClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ImagenClient {
    /// Create a client from configuration. Fails when no API key is
    /// configured.
    pub fn new(config: &ImagenConfig, timeout: Duration) -> AppResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            AppError::configuration("imagen.api_key is required for AI_GENERATE jobs")
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::with_source(
                printworks_core::error::ErrorKind::Internal,
                "Failed to build HTTP client",
                e,
            ))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }
}

// Manual impl: the generation URL embeds the API key, keep it out of logs.
impl fmt::Debug for ImagenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagenClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ImageGenerator for ImagenClient {
    async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        model_override: Option<&str>,
    ) -> AppResult<GeneratedImage> {
        let model = model_override.unwrap_or(&self.model);
        let url = format!(
            "{}/v1beta/models/{}:generateImages?key={}",
            self.endpoint, model, self.api_key
        );

        tracing::info!(
            model,
            aspect_ratio,
            prompt_chars = prompt.len(),
            "Calling Imagen API"
        );

        let request = GenerateRequest {
            prompt,
            config: GenerateConfig {
                number_of_images: 1,
                aspect_ratio,
                output_mime_type: "image/png",
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::upstream_http(format!("Imagen API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::upstream_http(format!(
                "Imagen API error: {} {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                truncate(&body, MAX_ERROR_BODY_CHARS)
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream_api(format!("Invalid Imagen API response: {e}")))?;

        if let Some(err) = body.error {
            return Err(AppError::upstream_api(format!(
                "Imagen API error: {} (code {}, {})",
                err.message, err.code, err.status
            )));
        }

        // Preferred AI Studio shape.
        if let Some(encoded) = body
            .generated_images
            .iter()
            .find_map(|entry| entry.image.as_ref()?.image_bytes.as_deref())
        {
            let bytes = decode_base64(encoded)?;
            tracing::debug!(size_bytes = bytes.len(), "Generated image");
            return Ok(GeneratedImage {
                bytes,
                mime_type: "image/png".to_string(),
            });
        }

        // Fallback Vertex shape.
        if let Some(prediction) = body
            .predictions
            .iter()
            .find(|p| p.bytes_base64_encoded.is_some())
        {
            let encoded = prediction
                .bytes_base64_encoded
                .as_deref()
                .unwrap_or_default();
            let bytes = decode_base64(encoded)?;
            let mime_type = prediction
                .mime_type
                .clone()
                .unwrap_or_else(|| "image/png".to_string());
            tracing::debug!(size_bytes = bytes.len(), mime_type, "Generated image");
            return Ok(GeneratedImage { bytes, mime_type });
        }

        Err(AppError::no_image_data("Imagen API returned no image data"))
    }
}

fn decode_base64(encoded: &str) -> AppResult<Bytes> {
    BASE64
        .decode(encoded)
        .map(Bytes::from)
        .map_err(|e| AppError::upstream_api(format!("Invalid base64 image payload: {e}")))
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

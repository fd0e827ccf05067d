//! Wire types for the Imagen generation endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateImages`.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub prompt: &'a str,
    pub config: GenerateConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateConfig<'a> {
    pub number_of_images: u32,
    pub aspect_ratio: &'a str,
    pub output_mime_type: &'a str,
}

/// Response body. The AI Studio shape carries `generatedImages`; the
/// Vertex shape carries `predictions`. Either may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub generated_images: Vec<GeneratedImageEntry>,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedImageEntry {
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImagePayload {
    pub image_bytes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Prediction {
    pub bytes_base64_encoded: Option<String>,
    pub mime_type: Option<String>,
}

/// Explicit error object some failures carry in a 200 body.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub code: i64,
    pub message: String,
    pub status: String,
}

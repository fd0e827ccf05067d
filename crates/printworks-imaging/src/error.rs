//! Unified error type for the derivative-generation pipeline.
//!
//! All stage errors (decode, trim, resize, encode) are consolidated into
//! a single `TransformError` enum that maps cleanly to
//! `printworks_core::error::AppError`.

use printworks_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Unified error type for all derivative-generation operations.
///
/// Any variant aborts the whole job: no partial derivative set is ever
/// produced. The pipeline is deterministic, so a caller may simply
/// re-run the job.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The source bytes could not be decoded as a raster image.
    #[error("Failed to decode source image: {0}")]
    Decode(image::ImageError),

    /// The source image has no pixel with non-zero alpha.
    #[error("Source image has no visible pixels")]
    NothingVisible,

    /// A derivative could not be encoded as PNG.
    #[error("Failed to encode derivative '{name}': {source}")]
    Encode {
        /// The derivative being encoded.
        name: String,
        /// Underlying encoder error.
        source: image::ImageError,
    },
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        AppError::with_source(ErrorKind::Transform, err.to_string(), err)
    }
}

//! Unified application error types for Printworks.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Required configuration is missing or invalid. Fatal: the run
    /// aborts before any job is touched.
    Configuration,
    /// Fetching a job batch from the core service failed.
    Acquisition,
    /// Input validation failed (e.g. an unsigned source download URL).
    Validation,
    /// Image decode, resize, or encode failed.
    Transform,
    /// An object-storage upload failed.
    Upload,
    /// The generation API returned a non-success HTTP status.
    UpstreamHttp,
    /// The generation API returned an explicit error object.
    UpstreamApi,
    /// The generation API response carried no usable image payload.
    NoImageData,
    /// Posting a completion callback failed. Logged, never escalated.
    Callback,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An external service call failed (e.g. the source-image download).
    ExternalService,
    /// An internal worker error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Acquisition => write!(f, "ACQUISITION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Transform => write!(f, "TRANSFORM"),
            Self::Upload => write!(f, "UPLOAD"),
            Self::UpstreamHttp => write!(f, "UPSTREAM_HTTP"),
            Self::UpstreamApi => write!(f, "UPSTREAM_API"),
            Self::NoImageData => write!(f, "NO_IMAGE_DATA"),
            Self::Callback => write!(f, "CALLBACK"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Printworks.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. Job-scoped errors end up as the failure
/// callback's error message, so `Display` output must carry enough context
/// to diagnose on its own (status codes, truncated response bodies).
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a job-acquisition error.
    pub fn acquisition(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Acquisition, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an image-transform error.
    pub fn transform(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transform, message)
    }

    /// Create an upload error.
    pub fn upload(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Upload, message)
    }

    /// Create an upstream HTTP-status error.
    pub fn upstream_http(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamHttp, message)
    }

    /// Create an upstream API error.
    pub fn upstream_api(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamApi, message)
    }

    /// Create a no-image-data error.
    pub fn no_image_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoImageData, message)
    }

    /// Create a callback error.
    pub fn callback(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Callback, message)
    }

    /// Create an external-service error.
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::upstream_http("Imagen API error: 500 Internal Server Error");
        assert_eq!(
            err.to_string(),
            "UPSTREAM_HTTP: Imagen API error: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("boom");
        let err = AppError::with_source(ErrorKind::Upload, "upload failed", io);
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Upload);
        assert!(cloned.source.is_none());
    }
}

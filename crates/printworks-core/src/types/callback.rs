//! Completion-callback payload posted to the core service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::manifest::Manifest;

/// Type-specific success result carried in a callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobResult {
    /// Image-process outcome: where the bundle landed and what is in it.
    Bundle {
        /// Key prefix the bundle was uploaded under.
        bundle_prefix: String,
        /// The manifest that was uploaded with the bundle.
        manifest: Manifest,
    },
    /// AI-generate outcome: the stored artifact and its size.
    GeneratedImage {
        /// Storage key of the generated image.
        image_key: String,
        /// Uploaded size in bytes.
        size_bytes: u64,
        /// Opaque finalize metadata echoed from the job.
        #[serde(skip_serializing_if = "Option::is_none")]
        finalize: Option<Value>,
    },
}

/// The tagged terminal outcome of one job. Exactly one payload is sent
/// per job per run, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackPayload {
    /// Whether the job succeeded.
    pub success: bool,
    /// Present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JobResult>,
    /// Present on failure: a human-readable diagnostic message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CallbackPayload {
    /// Build a success payload.
    pub fn success(result: JobResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Build a failure payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

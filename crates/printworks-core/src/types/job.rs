//! Job variants and fail-closed wire parsing.
//!
//! The core service tags only AI jobs with an explicit `type` field;
//! records without one are image-process jobs. Parsing rejects any
//! record missing a required field instead of coercing it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::result::AppResult;

/// The job types the worker knows how to drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    /// Derivative generation from a source design image.
    ImageProcess,
    /// AI image synthesis from a text prompt.
    AiGenerate,
}

impl JobType {
    /// Wire name used in the acquisition query string and the `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageProcess => "IMAGE_PROCESS",
            Self::AiGenerate => "AI_GENERATE",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derivative-generation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageProcessJob {
    /// Job identifier assigned by the core service.
    pub job_id: String,
    /// Design version this job renders; opaque to the worker.
    pub design_version_id: String,
    /// Signed URL the source image is downloaded from.
    pub source_download_url: String,
    /// Key prefix the output bundle is uploaded under.
    pub upload_prefix: String,
    /// URL the terminal outcome is posted to.
    pub callback_complete_url: String,
}

/// An AI image-synthesis job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiGenerateJob {
    /// Job identifier assigned by the core service.
    pub job_id: String,
    /// Text prompt for the generation API.
    pub prompt: String,
    /// Aspect-ratio hint (e.g. `"1:1"`, `"3:4"`).
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    /// Model override; when absent the configured default model is used.
    #[serde(default)]
    pub model: Option<String>,
    /// Storage key the generated image is written to.
    pub upload_key: String,
    /// URL the terminal outcome is posted to.
    pub callback_complete_url: String,
    /// Opaque finalize metadata, echoed back in the success callback.
    #[serde(default)]
    pub finalize: Option<Value>,
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

/// One unit of queued work. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Job {
    /// Derivative-generation job.
    ImageProcess(ImageProcessJob),
    /// AI-synthesis job.
    AiGenerate(AiGenerateJob),
}

impl Job {
    /// Parse one job record, dispatching on the optional `type` tag.
    ///
    /// Records tagged `AI_GENERATE` parse as [`AiGenerateJob`]; untagged
    /// records and records tagged `IMAGE_PROCESS` parse as
    /// [`ImageProcessJob`]. Any other tag, or any missing required field,
    /// rejects the record.
    pub fn from_value(value: Value) -> AppResult<Self> {
        let tag = value.get("type").and_then(Value::as_str);
        match tag {
            Some("AI_GENERATE") => serde_json::from_value::<AiGenerateJob>(value)
                .map(Job::AiGenerate)
                .map_err(|e| AppError::validation(format!("Invalid AI_GENERATE job: {e}"))),
            None | Some("IMAGE_PROCESS") => serde_json::from_value::<ImageProcessJob>(value)
                .map(Job::ImageProcess)
                .map_err(|e| AppError::validation(format!("Invalid IMAGE_PROCESS job: {e}"))),
            Some(other) => Err(AppError::validation(format!(
                "Unknown job type tag: {other}"
            ))),
        }
    }

    /// The job's type.
    pub fn job_type(&self) -> JobType {
        match self {
            Self::ImageProcess(_) => JobType::ImageProcess,
            Self::AiGenerate(_) => JobType::AiGenerate,
        }
    }

    /// The job identifier.
    pub fn job_id(&self) -> &str {
        match self {
            Self::ImageProcess(job) => &job.job_id,
            Self::AiGenerate(job) => &job.job_id,
        }
    }

    /// The completion-callback URL.
    pub fn callback_complete_url(&self) -> &str {
        match self {
            Self::ImageProcess(job) => &job.callback_complete_url,
            Self::AiGenerate(job) => &job.callback_complete_url,
        }
    }
}

/// Parse the canonical acquisition response envelope `{ "data": [...] }`.
///
/// Historic service versions also emitted top-level arrays and
/// `{ "jobs": [...] }`; those shapes are legacy and rejected here.
pub fn parse_jobs_response(body: Value) -> AppResult<Vec<Job>> {
    let records = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::acquisition("Invalid job response: expected { data: Job[] }")
        })?
        .clone();

    records.into_iter().map(Job::from_value).collect()
}

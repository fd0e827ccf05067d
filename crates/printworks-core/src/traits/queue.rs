//! Traits for the core-service HTTP surface the worker consumes.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;
use crate::types::callback::CallbackPayload;
use crate::types::job::{Job, JobType};

/// Source of queued work and of the signed source assets jobs point at.
///
/// Implemented by `printworks-queue`'s `CoreClient`.
#[async_trait]
pub trait JobSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch up to `limit` leased jobs of one type. An empty batch is
    /// a normal outcome, not an error.
    async fn fetch_jobs(&self, job_type: JobType, limit: u32) -> AppResult<Vec<Job>>;

    /// Download a source asset from a signed URL.
    async fn download_source(&self, url: &str) -> AppResult<Bytes>;
}

/// Sink for completion callbacks.
///
/// `notify` returns the send outcome; the *best-effort* discipline
/// (log and never escalate) is the orchestrator's responsibility.
#[async_trait]
pub trait CallbackNotifier: Send + Sync + std::fmt::Debug + 'static {
    /// Post one terminal outcome to the job's callback URL.
    async fn notify(&self, callback_url: &str, payload: &CallbackPayload) -> AppResult<()>;
}

//! Job handler trait.

use async_trait::async_trait;

use printworks_core::result::AppResult;
use printworks_core::types::callback::JobResult;
use printworks_core::types::job::{Job, JobType};

/// Trait for job handler implementations.
///
/// A handler owns the full pipeline for one job type. Any error it
/// returns is caught at the per-job boundary and reported via a failure
/// callback; it never aborts the run.
#[async_trait]
pub trait JobHandler: Send + Sync + std::fmt::Debug {
    /// The job type this handler processes.
    fn job_type(&self) -> JobType;

    /// Execute one job to completion, returning the success result that
    /// goes into the callback.
    async fn execute(&self, job: &Job) -> AppResult<JobResult>;
}

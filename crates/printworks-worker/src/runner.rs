//! Worker runner — drains one batch per job type, once per invocation.

use std::sync::Arc;

use printworks_core::config::worker::WorkerConfig;
use printworks_core::error::AppError;
use printworks_core::result::AppResult;
use printworks_core::traits::queue::{CallbackNotifier, JobSource};
use printworks_core::types::callback::CallbackPayload;

use crate::handler::JobHandler;

/// Run-once orchestrator.
///
/// Each registered handler's job type is drained independently: an
/// acquisition failure for one type is recorded but never prevents the
/// other types from being attempted, and a handler or callback failure
/// for one job never prevents the rest of the batch.
#[derive(Debug)]
pub struct WorkerRunner {
    source: Arc<dyn JobSource>,
    notifier: Arc<dyn CallbackNotifier>,
    handlers: Vec<Arc<dyn JobHandler>>,
    config: WorkerConfig,
    worker_id: String,
}

impl WorkerRunner {
    /// Create a runner over the given handlers.
    pub fn new(
        source: Arc<dyn JobSource>,
        notifier: Arc<dyn CallbackNotifier>,
        handlers: Vec<Arc<dyn JobHandler>>,
        config: WorkerConfig,
    ) -> Self {
        let worker_id = format!("worker-{}", &uuid::Uuid::new_v4().to_string()[..8]);
        Self {
            source,
            notifier,
            handlers,
            config,
            worker_id,
        }
    }

    /// Drain every registered job type once.
    ///
    /// Returns `Err` only for run-level failures (a job fetch that
    /// failed outright); per-job outcomes are reported through
    /// callbacks and never escalate.
    pub async fn run(&self) -> AppResult<()> {
        tracing::info!(
            worker_id = self.worker_id,
            batch_size = self.config.batch_size,
            "Worker run started"
        );

        let mut acquisition_error: Option<AppError> = None;

        for handler in &self.handlers {
            let job_type = handler.job_type();

            let jobs = match self
                .source
                .fetch_jobs(job_type, self.config.batch_size)
                .await
            {
                Ok(jobs) => jobs,
                Err(e) => {
                    tracing::error!(%job_type, error = %e, "Failed to fetch jobs");
                    acquisition_error.get_or_insert(e);
                    continue;
                }
            };

            if jobs.is_empty() {
                tracing::info!(%job_type, "No jobs to process");
                continue;
            }

            tracing::info!(%job_type, count = jobs.len(), "Processing batch");

            for job in &jobs {
                let job_id = job.job_id();
                let payload = match handler.execute(job).await {
                    Ok(result) => {
                        tracing::info!(job_id, "Job completed successfully");
                        CallbackPayload::success(result)
                    }
                    Err(e) => {
                        tracing::error!(job_id, error = %e, "Job failed");
                        CallbackPayload::failure(e.to_string())
                    }
                };

                // Best-effort notify: a failed send is logged and never
                // aborts the remaining jobs.
                if let Err(e) = self
                    .notifier
                    .notify(job.callback_complete_url(), &payload)
                    .await
                {
                    tracing::error!(job_id, error = %e, "Failed to send completion callback");
                }
            }
        }

        tracing::info!(worker_id = self.worker_id, "Worker run completed");

        match acquisition_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

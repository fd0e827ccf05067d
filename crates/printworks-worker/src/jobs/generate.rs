//! AI-generate pipeline: generate → upload single artifact.

use std::sync::Arc;

use async_trait::async_trait;

use printworks_core::error::AppError;
use printworks_core::result::AppResult;
use printworks_core::traits::generate::ImageGenerator;
use printworks_core::traits::storage::ObjectStore;
use printworks_core::types::callback::JobResult;
use printworks_core::types::job::{Job, JobType};

use crate::handler::JobHandler;

/// Handler for AI_GENERATE jobs.
#[derive(Debug)]
pub struct GenerateJobHandler {
    generator: Arc<dyn ImageGenerator>,
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl GenerateJobHandler {
    /// Create a handler.
    pub fn new(
        generator: Arc<dyn ImageGenerator>,
        store: Arc<dyn ObjectStore>,
        bucket: String,
    ) -> Self {
        Self {
            generator,
            store,
            bucket,
        }
    }
}

#[async_trait]
impl JobHandler for GenerateJobHandler {
    fn job_type(&self) -> JobType {
        JobType::AiGenerate
    }

    async fn execute(&self, job: &Job) -> AppResult<JobResult> {
        let Job::AiGenerate(job) = job else {
            return Err(AppError::internal(format!(
                "Handler received a {} job",
                job.job_type()
            )));
        };

        tracing::info!(job_id = job.job_id, "Generating image");
        let generated = self
            .generator
            .generate(&job.prompt, &job.aspect_ratio, job.model.as_deref())
            .await?;

        let size_bytes = generated.size_bytes();
        tracing::info!(
            job_id = job.job_id,
            key = job.upload_key,
            size_bytes,
            "Uploading generated image"
        );
        self.store
            .put(
                &self.bucket,
                &job.upload_key,
                generated.bytes,
                &generated.mime_type,
            )
            .await?;

        Ok(JobResult::GeneratedImage {
            image_key: job.upload_key.clone(),
            size_bytes,
            finalize: job.finalize.clone(),
        })
    }
}

//! Image-process pipeline: validate → download → transform → bundle →
//! upload.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use printworks_core::error::{AppError, ErrorKind};
use printworks_core::result::AppResult;
use printworks_core::traits::queue::JobSource;
use printworks_core::traits::storage::ObjectStore;
use printworks_core::types::callback::JobResult;
use printworks_core::types::job::{Job, JobType};
use printworks_core::types::upload::UploadFile;
use printworks_imaging::{build_manifest, transform};
use printworks_queue::validate_signed_download_url;
use printworks_storage::upload_bundle;

use crate::handler::JobHandler;

/// Handler for IMAGE_PROCESS jobs.
#[derive(Debug)]
pub struct ImageProcessHandler {
    source: Arc<dyn JobSource>,
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ImageProcessHandler {
    /// Create a handler.
    pub fn new(source: Arc<dyn JobSource>, store: Arc<dyn ObjectStore>, bucket: String) -> Self {
        Self {
            source,
            store,
            bucket,
        }
    }
}

#[async_trait]
impl JobHandler for ImageProcessHandler {
    fn job_type(&self) -> JobType {
        JobType::ImageProcess
    }

    async fn execute(&self, job: &Job) -> AppResult<JobResult> {
        let Job::ImageProcess(job) = job else {
            return Err(AppError::internal(format!(
                "Handler received a {} job",
                job.job_type()
            )));
        };

        validate_signed_download_url(&job.source_download_url)?;

        tracing::info!(job_id = job.job_id, "Downloading source image");
        let source_bytes = self.source.download_source(&job.source_download_url).await?;

        tracing::info!(job_id = job.job_id, "Transforming image");
        let outputs = tokio::task::spawn_blocking(move || transform(&source_bytes))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Transform task panicked", e))??;

        let manifest = build_manifest(&outputs);

        let mut files: Vec<UploadFile> = outputs
            .into_iter()
            .map(|output| UploadFile::new(output.name, output.bytes, "image/png"))
            .collect();
        files.push(UploadFile::new(
            "manifest.json",
            Bytes::from(serde_json::to_vec_pretty(&manifest)?),
            "application/json",
        ));

        tracing::info!(
            job_id = job.job_id,
            prefix = job.upload_prefix,
            file_count = files.len(),
            "Uploading bundle"
        );
        upload_bundle(self.store.as_ref(), &self.bucket, &job.upload_prefix, &files).await?;

        Ok(JobResult::Bundle {
            bundle_prefix: job.upload_prefix.clone(),
            manifest,
        })
    }
}

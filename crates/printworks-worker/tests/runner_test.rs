//! Orchestration-level tests: callback discipline, per-job isolation,
//! and acquisition-failure handling, all against in-memory doubles.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use printworks_core::config::worker::WorkerConfig;
use printworks_core::error::{AppError, ErrorKind};
use printworks_core::result::AppResult;
use printworks_core::traits::queue::{CallbackNotifier, JobSource};
use printworks_core::types::callback::{CallbackPayload, JobResult};
use printworks_core::types::job::{AiGenerateJob, ImageProcessJob, Job, JobType};
use printworks_worker::handler::JobHandler;
use printworks_worker::runner::WorkerRunner;

fn image_job(id: &str) -> Job {
    Job::ImageProcess(ImageProcessJob {
        job_id: id.to_string(),
        design_version_id: "dv-1".to_string(),
        source_download_url: "https://core.example.com/assets/download?key=k&exp=1&sig=s"
            .to_string(),
        upload_prefix: format!("designs/{id}"),
        callback_complete_url: format!("https://core.example.com/jobs/{id}/complete"),
    })
}

fn ai_job(id: &str) -> Job {
    Job::AiGenerate(AiGenerateJob {
        job_id: id.to_string(),
        prompt: "a red fox".to_string(),
        aspect_ratio: "1:1".to_string(),
        model: None,
        upload_key: format!("generated/{id}.png"),
        callback_complete_url: format!("https://core.example.com/jobs/{id}/complete"),
        finalize: None,
    })
}

/// Serves canned batches per job type; optionally fails a type's fetch.
#[derive(Debug, Default)]
struct FakeSource {
    batches: HashMap<JobType, Vec<Job>>,
    fail_fetch: Option<JobType>,
}

#[async_trait]
impl JobSource for FakeSource {
    async fn fetch_jobs(&self, job_type: JobType, _limit: u32) -> AppResult<Vec<Job>> {
        if self.fail_fetch == Some(job_type) {
            return Err(AppError::acquisition("Failed to fetch jobs: 503"));
        }
        Ok(self.batches.get(&job_type).cloned().unwrap_or_default())
    }

    async fn download_source(&self, _url: &str) -> AppResult<Bytes> {
        Ok(Bytes::from_static(b"unused"))
    }
}

/// Records every callback; optionally fails sends to one URL.
#[derive(Debug, Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, CallbackPayload)>>,
    fail_url: Option<String>,
}

#[async_trait]
impl CallbackNotifier for RecordingNotifier {
    async fn notify(&self, callback_url: &str, payload: &CallbackPayload) -> AppResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((callback_url.to_string(), payload.clone()));
        if self.fail_url.as_deref() == Some(callback_url) {
            return Err(AppError::callback("Callback failed: 500"));
        }
        Ok(())
    }
}

/// Succeeds or fails per job id.
#[derive(Debug)]
struct FakeHandler {
    job_type: JobType,
    fail_ids: Vec<String>,
}

#[async_trait]
impl JobHandler for FakeHandler {
    fn job_type(&self) -> JobType {
        self.job_type
    }

    async fn execute(&self, job: &Job) -> AppResult<JobResult> {
        if self.fail_ids.iter().any(|id| id == job.job_id()) {
            return Err(AppError::transform("Failed to decode source image"));
        }
        Ok(JobResult::GeneratedImage {
            image_key: format!("out/{}.png", job.job_id()),
            size_bytes: 1,
            finalize: None,
        })
    }
}

fn runner(
    source: FakeSource,
    notifier: Arc<RecordingNotifier>,
    handlers: Vec<Arc<dyn JobHandler>>,
) -> WorkerRunner {
    WorkerRunner::new(
        Arc::new(source),
        notifier,
        handlers,
        WorkerConfig::default(),
    )
}

#[tokio::test]
async fn exactly_one_callback_per_job_regardless_of_outcome() {
    let source = FakeSource {
        batches: HashMap::from([(
            JobType::ImageProcess,
            vec![image_job("job-1"), image_job("job-2")],
        )]),
        ..FakeSource::default()
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let handler: Arc<dyn JobHandler> = Arc::new(FakeHandler {
        job_type: JobType::ImageProcess,
        fail_ids: vec!["job-1".to_string()],
    });

    runner(source, Arc::clone(&notifier), vec![handler])
        .run()
        .await
        .expect("run");

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(!sent[0].1.success);
    assert!(sent[0].1.error.as_deref().unwrap().contains("TRANSFORM"));
    assert!(sent[1].1.success);
}

#[tokio::test]
async fn callback_failure_never_stops_the_batch() {
    let source = FakeSource {
        batches: HashMap::from([(
            JobType::ImageProcess,
            vec![image_job("job-1"), image_job("job-2")],
        )]),
        ..FakeSource::default()
    };
    let notifier = Arc::new(RecordingNotifier {
        fail_url: Some("https://core.example.com/jobs/job-1/complete".to_string()),
        ..RecordingNotifier::default()
    });
    let handler: Arc<dyn JobHandler> = Arc::new(FakeHandler {
        job_type: JobType::ImageProcess,
        fail_ids: vec![],
    });

    // The failing send for job-1 must not abort the run or job-2.
    runner(source, Arc::clone(&notifier), vec![handler])
        .run()
        .await
        .expect("run");

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent[1].0.ends_with("/jobs/job-2/complete"));
}

#[tokio::test]
async fn acquisition_failure_skips_type_but_not_the_run() {
    let source = FakeSource {
        batches: HashMap::from([(JobType::AiGenerate, vec![ai_job("job-9")])]),
        fail_fetch: Some(JobType::ImageProcess),
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let handlers: Vec<Arc<dyn JobHandler>> = vec![
        Arc::new(FakeHandler {
            job_type: JobType::ImageProcess,
            fail_ids: vec![],
        }),
        Arc::new(FakeHandler {
            job_type: JobType::AiGenerate,
            fail_ids: vec![],
        }),
    ];

    let err = runner(source, Arc::clone(&notifier), handlers)
        .run()
        .await
        .expect_err("acquisition failure surfaces at run level");

    assert_eq!(err.kind, ErrorKind::Acquisition);
    // The AI batch was still attempted and reported.
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].0.ends_with("/jobs/job-9/complete"));
}

#[tokio::test]
async fn empty_batches_are_a_normal_outcome() {
    let notifier = Arc::new(RecordingNotifier::default());
    let handler: Arc<dyn JobHandler> = Arc::new(FakeHandler {
        job_type: JobType::ImageProcess,
        fail_ids: vec![],
    });

    runner(FakeSource::default(), Arc::clone(&notifier), vec![handler])
        .run()
        .await
        .expect("run");

    assert!(notifier.sent.lock().unwrap().is_empty());
}

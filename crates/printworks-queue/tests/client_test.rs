//! Integration tests for the core-service client against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use printworks_core::config::queue::QueueConfig;
use printworks_core::error::ErrorKind;
use printworks_core::traits::queue::{CallbackNotifier, JobSource};
use printworks_core::types::callback::CallbackPayload;
use printworks_core::types::job::{Job, JobType};
use printworks_queue::CoreClient;

fn client(server: &MockServer) -> CoreClient {
    let config = QueueConfig {
        base_url: server.uri(),
        worker_token: "worker-token".to_string(),
    };
    CoreClient::new(&config, Duration::from_secs(5)).expect("client")
}

fn image_record() -> serde_json::Value {
    json!({
        "job_id": "job-1",
        "design_version_id": "dv-1",
        "source_download_url": "https://core.example.com/assets/download?key=k&exp=1&sig=s",
        "upload_prefix": "designs/dv-1",
        "callback_complete_url": "https://core.example.com/jobs/job-1/complete"
    })
}

#[tokio::test]
async fn fetch_jobs_sends_type_limit_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/next"))
        .and(query_param("type", "IMAGE_PROCESS"))
        .and(query_param("limit", "2"))
        .and(header("X-WORKER-TOKEN", "worker-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [image_record()] })))
        .mount(&server)
        .await;

    let jobs = client(&server)
        .fetch_jobs(JobType::ImageProcess, 2)
        .await
        .expect("fetch");

    assert_eq!(jobs.len(), 1);
    assert!(matches!(jobs[0], Job::ImageProcess(_)));
}

#[tokio::test]
async fn fetch_jobs_empty_batch_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let jobs = client(&server)
        .fetch_jobs(JobType::AiGenerate, 2)
        .await
        .expect("fetch");
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn fetch_jobs_http_error_is_acquisition_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/next"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_jobs(JobType::ImageProcess, 2)
        .await
        .expect_err("should fail");

    assert_eq!(err.kind, ErrorKind::Acquisition);
    assert!(err.message.contains("503"));
    assert!(err.message.contains("maintenance"));
}

#[tokio::test]
async fn fetch_jobs_rejects_legacy_top_level_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([image_record()])))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_jobs(JobType::ImageProcess, 2)
        .await
        .expect_err("should fail");
    assert!(err.message.contains("expected { data: Job[] }"));
}

#[tokio::test]
async fn download_source_returns_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"image-bytes".to_vec()))
        .mount(&server)
        .await;

    let url = format!("{}/assets/download?key=k&exp=1&sig=s", server.uri());
    let bytes = client(&server).download_source(&url).await.expect("download");
    assert_eq!(bytes.as_ref(), b"image-bytes");
}

#[tokio::test]
async fn download_source_surfaces_forbidden_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/download"))
        .respond_with(ResponseTemplate::new(403).set_body_string("signature expired"))
        .mount(&server)
        .await;

    let url = format!("{}/assets/download?key=k&exp=1767225600&sig=s", server.uri());
    let err = client(&server)
        .download_source(&url)
        .await
        .expect_err("should fail");

    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert!(err.message.contains("403"));
    assert!(err.message.contains("signature expired"));
}

#[tokio::test]
async fn notify_posts_payload_with_token() {
    let server = MockServer::start().await;
    let payload = CallbackPayload::failure("TRANSFORM: decode failed");

    Mock::given(method("POST"))
        .and(path("/jobs/job-1/complete"))
        .and(header("X-WORKER-TOKEN", "worker-token"))
        .and(body_json(json!({
            "success": false,
            "error": "TRANSFORM: decode failed"
        })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = format!("{}/jobs/job-1/complete", server.uri());
    client(&server).notify(&url, &payload).await.expect("notify");
}

#[tokio::test]
async fn notify_http_error_is_callback_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/jobs/job-1/complete"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/jobs/job-1/complete", server.uri());
    let err = client(&server)
        .notify(&url, &CallbackPayload::failure("boom"))
        .await
        .expect_err("should fail");

    assert_eq!(err.kind, ErrorKind::Callback);
    assert!(err.message.contains("500"));
}

//! HTTP client for the core service.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use url::Url;

use printworks_core::config::queue::QueueConfig;
use printworks_core::error::{AppError, ErrorKind};
use printworks_core::result::AppResult;
use printworks_core::traits::queue::{CallbackNotifier, JobSource};
use printworks_core::types::callback::CallbackPayload;
use printworks_core::types::job::{Job, JobType, parse_jobs_response};

/// Worker authentication header expected by the core service.
const WORKER_TOKEN_HEADER: &str = "X-WORKER-TOKEN";

/// How much of an error response body is kept for diagnostics.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the core service: leases jobs, serves signed source
/// assets, and receives completion callbacks.
pub struct CoreClient {
    http: reqwest::Client,
    base_url: String,
    worker_token: String,
}

impl CoreClient {
    /// Create a client from configuration.
    pub fn new(config: &QueueConfig, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            worker_token: config.worker_token.clone(),
        })
    }
}

// Manual impl: keep the worker token out of logs.
impl fmt::Debug for CoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreClient")
            .field("base_url", &self.base_url)
            .field("worker_token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl JobSource for CoreClient {
    async fn fetch_jobs(&self, job_type: JobType, limit: u32) -> AppResult<Vec<Job>> {
        let url = format!(
            "{}/jobs/next?type={}&limit={}",
            self.base_url, job_type, limit
        );

        let response = self
            .http
            .get(&url)
            .header(WORKER_TOKEN_HEADER, &self.worker_token)
            .send()
            .await
            .map_err(|e| AppError::acquisition(format!("Failed to fetch jobs: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::acquisition(format!(
                "Failed to fetch jobs: {} {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                truncate(&body, MAX_ERROR_BODY_CHARS)
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::acquisition(format!("Invalid job response: {e}")))?;

        parse_jobs_response(body)
    }

    async fn download_source(&self, url: &str) -> AppResult<Bytes> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Failed to download image: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // 400/403 usually means an expired or tampered signature;
            // log the expiry context so the failure is diagnosable
            // without replaying the URL.
            if status.as_u16() == 400 || status.as_u16() == 403 {
                log_signature_diagnostics(url, status.as_u16());
            }

            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Failed to download image: {} {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                truncate(&body, MAX_ERROR_BODY_CHARS)
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| AppError::external_service(format!("Failed to read image body: {e}")))
    }
}

#[async_trait]
impl CallbackNotifier for CoreClient {
    async fn notify(&self, callback_url: &str, payload: &CallbackPayload) -> AppResult<()> {
        let response = self
            .http
            .post(callback_url)
            .header(WORKER_TOKEN_HEADER, &self.worker_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::callback(format!("Callback failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::callback(format!(
                "Callback failed: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )));
        }

        Ok(())
    }
}

/// Log the signed-URL expiry context for a 400/403 download failure.
fn log_signature_diagnostics(url: &str, status: u16) {
    let now_utc = Utc::now().to_rfc3339();
    match Url::parse(url) {
        Ok(parsed) => {
            let exp_raw = parsed
                .query_pairs()
                .find(|(name, _)| name == "exp")
                .map(|(_, value)| value.into_owned());
            let exp_info = match &exp_raw {
                Some(raw) => {
                    let rendered = raw
                        .parse::<i64>()
                        .ok()
                        .and_then(|secs| DateTime::from_timestamp(secs, 0))
                        .map(|dt| dt.to_rfc3339())
                        .unwrap_or_else(|| "unparseable".to_string());
                    format!("exp={raw} ({rendered})")
                }
                None => "exp=missing".to_string(),
            };
            tracing::error!(
                status,
                path = parsed.path(),
                %exp_info,
                now = %now_utc,
                "Signed download failed"
            );
        }
        Err(_) => {
            tracing::error!(status, now = %now_utc, "Signed download failed (URL parse error)");
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

//! # printworks-queue
//!
//! HTTP client for the core service that owns the job queue: job
//! acquisition, signed source-asset downloads, and completion callbacks.

pub mod client;
pub mod signed_url;

pub use client::CoreClient;
pub use signed_url::validate_signed_download_url;

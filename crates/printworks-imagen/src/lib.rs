//! # printworks-imagen
//!
//! HTTP client for the Google Imagen generation API (AI Studio). Sends
//! one generation request per call and normalizes the two response
//! shapes the API is known to emit into raw image bytes plus a MIME
//! type. No retries: retry policy belongs to the caller.

pub mod client;
mod types;

pub use client::ImagenClient;

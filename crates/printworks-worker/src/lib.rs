//! # printworks-worker
//!
//! The run orchestrator: drains one batch per supported job type,
//! dispatches each job to its handler behind an isolation boundary, and
//! reports every terminal outcome with a best-effort callback.

pub mod handler;
pub mod jobs;
pub mod runner;

pub use handler::JobHandler;
pub use runner::WorkerRunner;

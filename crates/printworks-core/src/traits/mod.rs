//! Service traits implemented by the leaf crates.
//!
//! The traits live here so the worker crate can be exercised against
//! test doubles without touching the network or the storage SDK.

pub mod generate;
pub mod queue;
pub mod storage;

pub use generate::{GeneratedImage, ImageGenerator};
pub use queue::{CallbackNotifier, JobSource};
pub use storage::ObjectStore;

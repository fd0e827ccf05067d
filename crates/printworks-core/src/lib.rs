//! # printworks-core
//!
//! Core crate for the Printworks job worker. Contains traits,
//! configuration schemas, domain types (jobs, callbacks, manifests,
//! derivative specs), and the unified error system.
//!
//! This crate has **no** internal dependencies on other Printworks crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

//! # printworks-storage
//!
//! Object-storage uploads for Printworks: an R2-backed implementation of
//! the core `ObjectStore` trait plus the sequential bundle-upload helper.

pub mod bundle;
pub mod r2;

pub use bundle::{join_key, upload_bundle};
pub use r2::R2Store;

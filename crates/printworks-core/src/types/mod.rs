//! Domain types shared across the Printworks crates.

pub mod callback;
pub mod derivative;
pub mod job;
pub mod manifest;
pub mod upload;

pub use callback::{CallbackPayload, JobResult};
pub use derivative::{DERIVATIVE_SPECS, DerivativeSpec, ImageOutput};
pub use job::{AiGenerateJob, ImageProcessJob, Job, JobType, parse_jobs_response};
pub use manifest::{Manifest, ManifestEntry};
pub use upload::UploadFile;

//! Printworks Worker — print-asset job runner
//!
//! Main entry point: loads configuration, wires the clients together,
//! and drains one batch per job type. The process exits non-zero only
//! for configuration failures or a run-level acquisition failure;
//! individual job failures are reported through callbacks.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use printworks_core::config::AppConfig;
use printworks_core::error::AppError;
use printworks_core::traits::generate::ImageGenerator;
use printworks_core::traits::queue::{CallbackNotifier, JobSource};
use printworks_core::traits::storage::ObjectStore;
use printworks_imagen::ImagenClient;
use printworks_queue::CoreClient;
use printworks_storage::R2Store;
use printworks_worker::handler::JobHandler;
use printworks_worker::jobs::generate::GenerateJobHandler;
use printworks_worker::jobs::image_process::ImageProcessHandler;
use printworks_worker::runner::WorkerRunner;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Worker failed: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PRINTWORKS_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Wire the clients and execute one worker run
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting printworks worker v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.worker.http_timeout_seconds);

    let core = Arc::new(CoreClient::new(&config.queue, timeout)?);
    let store = Arc::new(R2Store::new(&config.storage).await?);

    let mut handlers: Vec<Arc<dyn JobHandler>> = vec![Arc::new(ImageProcessHandler::new(
        Arc::clone(&core) as Arc<dyn JobSource>,
        Arc::clone(&store) as Arc<dyn ObjectStore>,
        config.storage.bucket.clone(),
    ))];

    if config.imagen.api_key.is_some() {
        let generator = Arc::new(ImagenClient::new(&config.imagen, timeout)?);
        handlers.push(Arc::new(GenerateJobHandler::new(
            generator as Arc<dyn ImageGenerator>,
            Arc::clone(&store) as Arc<dyn ObjectStore>,
            config.storage.bucket.clone(),
        )));
    } else {
        tracing::info!("No Imagen API key configured; skipping AI_GENERATE jobs");
    }

    let runner = WorkerRunner::new(
        Arc::clone(&core) as Arc<dyn JobSource>,
        core as Arc<dyn CallbackNotifier>,
        handlers,
        config.worker.clone(),
    );

    runner.run().await
}

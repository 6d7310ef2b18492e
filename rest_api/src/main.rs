use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rest_api::{load_server_config, start_server};
use storage::{InMemoryPatientStore, PatientRepository};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_server_config(config_path)?;
    info!(
        host = %config.host,
        port = config.port,
        patients = config.synthetic_patient_count,
        "starting sepsis clinical decision support backend"
    );

    let repository: Arc<dyn PatientRepository> = Arc::new(
        InMemoryPatientStore::with_synthetic_patients(config.synthetic_patient_count),
    );

    // Held for the lifetime of the server; dropping it would complete the
    // receiver and shut the server down.
    let (_shutdown_tx, shutdown_rx) = oneshot::channel();

    start_server(config, repository, shutdown_rx).await
}

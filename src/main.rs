use std::sync::Arc;

use crew_hours::api::{AppState, create_router};
use crew_hours::config::ConfigLoader;
use crew_hours::error::EngineError;
use crew_hours::store::{InMemoryTimeEntryStore, TimeEntryStore};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "crew_hours=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("CREW_HOURS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "No report configuration found, using defaults");
            ConfigLoader::default()
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        overtime_threshold = %config.overtime_threshold(),
        monthly_policy = ?config.config().overtime.monthly_policy,
        integrity_policy = ?config.config().data_integrity.policy,
        "Loaded report configuration"
    );

    let store: Arc<dyn TimeEntryStore> = Arc::new(InMemoryTimeEntryStore::default());
    let router = create_router(AppState::new(store, &config));

    let bind_addr =
        std::env::var("CREW_HOURS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Crew hours API listening");

    axum::serve(listener, router).await?;
    Ok(())
}

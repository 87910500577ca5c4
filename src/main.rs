// src/main.rs
use std::process::ExitCode;

use businesshub_api::{
    bind_with_fallback, build_app,
    config::{AppConfig, StoreBackend},
    database,
    state::AppState,
};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before the filter reads RUST_LOG
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Create application state
    let app_state = match (config.backend, &config.database) {
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory store; data is lost on exit");
            AppState::in_memory()
        }
        (StoreBackend::Mongo, Some(db_config)) => {
            let db = database::connect(db_config).await?;
            AppState::mongo(&db)
        }
        (StoreBackend::Mongo, None) => {
            return Err("mongo backend selected without a database configuration".into());
        }
    };

    let app = build_app(app_state);

    let listener = bind_with_fallback(config.host, config.port).await?;
    tracing::info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

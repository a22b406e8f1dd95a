use std::env;

use anyhow::{Context, Result};
use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use tracing::info;

/// Environment variable naming the directory that holds `engine.yaml`.
const CONFIG_DIR_VAR: &str = "PAYROLL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("Failed to load configuration from: {}", config_dir))?;

    let bind_address = config.server().bind_address.clone();
    info!(
        config_dir = %config_dir,
        days_per_month = config.calendar().days_per_month,
        hours_per_day = config.calendar().hours_per_day,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind: {}", bind_address))?;

    info!(address = %bind_address, "Payroll engine listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::{AppConfig, ConfigError};
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

/// Anything that stops the server from starting. All variants are fatal.
#[derive(Debug, Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database initialization failed: {0}")]
    Database(#[from] blog_infra::DbErr),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    run().await.inspect_err(|e| {
        tracing::error!(error = %e, "Server failed to start");
    })
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    // Schema must exist before the first request is accepted.
    let state = AppState::connect(&config.database).await?;

    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

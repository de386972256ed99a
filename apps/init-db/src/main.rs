//! Schema initialization CLI - creates the posts table if it is missing.

use std::process::ExitCode;

use blog_infra::DatabaseConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let Ok(url) = std::env::var("DATABASE_URL") else {
        tracing::error!("DATABASE_URL is not set in environment variables");
        return ExitCode::FAILURE;
    };

    let config = DatabaseConfig {
        url,
        max_connections: 1,
        min_connections: 1,
    };

    let result = match blog_infra::connect(&config).await {
        Ok(conn) => blog_infra::ensure_schema(&conn).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Database initialization failed");
            ExitCode::FAILURE
        }
    }
}

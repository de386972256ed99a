//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, DbErr, PostgresPostRepository};

/// Shared application state. Holds no mutable data of its own; the repository
/// hands out pooled connections per call.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Connect to PostgreSQL and make sure the schema exists.
    ///
    /// Any failure here must stop the process before it serves traffic.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let conn = blog_infra::connect(config).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
        })?;

        blog_infra::ensure_schema(&conn).await.inspect_err(|e| {
            tracing::error!(error = %e, "Database initialization failed");
        })?;

        tracing::info!("Application state initialized");

        Ok(Self::new(Arc::new(PostgresPostRepository::new(conn))))
    }
}

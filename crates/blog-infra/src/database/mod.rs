//! Database connection management and post storage.

mod connections;
mod memory;
mod postgres_repo;
mod schema;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use memory::InMemoryPostRepository;
pub use postgres_repo::PostgresPostRepository;
pub use schema::{ensure_schema, posts_table};

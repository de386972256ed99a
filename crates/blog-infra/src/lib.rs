//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! PostgreSQL storage via SeaORM, an in-memory fallback, and startup schema
//! initialization.

pub mod database;

pub use database::{
    DatabaseConfig, InMemoryPostRepository, PostgresPostRepository, connect, ensure_schema,
};

pub use sea_orm::DbErr;

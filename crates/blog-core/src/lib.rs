//! # Blog Core
//!
//! The domain layer of the blog posts API.
//! This crate contains the post model, input validation and the storage port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{RepoError, ValidationError};

//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of a create or update request.
///
/// Both fields are optional on the wire so that a missing field is reported
/// as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

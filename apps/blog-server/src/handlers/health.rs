//! Health check endpoint.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct Endpoints {
    #[serde(rename = "GET /api/posts")]
    pub list: &'static str,
    #[serde(rename = "POST /api/posts")]
    pub create: &'static str,
    #[serde(rename = "PUT /api/posts/<id>")]
    pub update: &'static str,
    #[serde(rename = "DELETE /api/posts/<id>")]
    pub delete: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// Health check endpoint - returns server status and the endpoint list.
/// Never touches storage.
///
/// GET /
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        message: "Blog API is running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            list: "Get all posts",
            create: "Create new post",
            update: "Update post",
            delete: "Delete post",
        },
    };

    HttpResponse::Ok().json(response)
}

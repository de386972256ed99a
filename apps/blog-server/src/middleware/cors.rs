//! CORS policy for the `/api` scope.

use actix_cors::Cors;
use actix_web::http::header;

/// Any origin, the CRUD methods plus preflight, and a JSON content type.
pub fn api_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
}

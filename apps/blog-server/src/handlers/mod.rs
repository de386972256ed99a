//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::cors::api_cors;
use crate::middleware::error;

/// Largest accepted JSON body. Post content has no length limit of its own.
const JSON_BODY_LIMIT: usize = 4 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(error::json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
    .route("/", web::get().to(health::health_check))
    .service(
        web::scope("/api")
            .wrap(api_cors())
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post))
                    .default_service(web::to(error::method_not_allowed)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post))
                    .default_service(web::to(error::method_not_allowed)),
            ),
    )
    .default_service(web::to(error::not_found));
}

// src/api/routes.rs
use actix_web::{error, web, HttpResponse};
use super::handlers;
use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/convert", web::post().to(handlers::convert))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check))
        )
        .route("/", web::get().to(handlers::index))
        .route("/{path:.*}", web::get().to(handlers::static_file_handler));
}

/// Rejected JSON bodies get the same `{"error": ...}` shape as other failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let body = ErrorResponse { error: err.to_string() };
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

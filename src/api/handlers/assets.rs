// src/api/handlers/assets.rs
use actix_web::{web, HttpResponse};
use rust_embed::RustEmbed;

const INDEX: &str = "index.html";

/// The converter page, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

impl StaticAssets {
    /// Serves an embedded file with a MIME type guessed from its extension.
    fn respond(path: &str) -> HttpResponse {
        let Some(file) = Self::get(path) else {
            log::debug!("No embedded asset for /{}", path);
            return HttpResponse::NotFound().body("404 Not Found");
        };

        let mime = mime_guess::from_path(path).first_or_octet_stream();
        HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.data.into_owned())
    }
}

/// `GET /`
pub async fn index() -> HttpResponse {
    StaticAssets::respond(INDEX)
}

/// `GET /{path}` for everything no other route claims.
pub async fn static_file_handler(path: web::Path<String>) -> HttpResponse {
    StaticAssets::respond(&path)
}

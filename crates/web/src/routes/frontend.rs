use std::path::Path;

use axum::{Json, Router, routing::get};
use storage::{Database, dto::participant::MessageResponse};
use tower_http::services::{ServeDir, ServeFile};

/// Bundled frontend: `/assets`, `/images` and the index page at `/`.
///
/// Without an `index.html` the root answers with a short API banner instead.
pub fn routes(static_dir: &Path) -> Router<Database> {
    let router = Router::new()
        .nest_service("/assets", ServeDir::new(static_dir.join("assets")))
        .nest_service("/images", ServeDir::new(static_dir.join("images")));

    let index = static_dir.join("index.html");
    if index.is_file() {
        tracing::info!(path = %index.display(), "Serving frontend");
        router.route_service("/", ServeFile::new(index))
    } else {
        tracing::warn!(
            path = %static_dir.display(),
            "No index.html found, serving API banner at /"
        );
        router.route("/", get(api_banner))
    }
}

async fn api_banner() -> Json<MessageResponse> {
    Json(MessageResponse::new("Robotics Challenge Leaderboard API"))
}

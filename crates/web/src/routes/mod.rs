use std::path::Path;

use axum::Router;
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::features::participants;

pub mod frontend;

pub fn create_router(db: Database, static_dir: &Path) -> Router {
    // Development-grade policy: any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(participants::routes())
        .merge(frontend::routes(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}

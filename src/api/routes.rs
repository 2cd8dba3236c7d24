use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::*;
use crate::config::ServerConfig;

pub fn create_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/api/convert", get(convert_point))
        .route("/api/batch", post(convert_batch))
        .route("/api/display", get(display_point))
        .route("/api/upload", post(upload_csv))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.body_limit_bytes))
                .layer(CorsLayer::permissive()),
        )
}

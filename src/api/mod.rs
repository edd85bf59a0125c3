use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::relay::RelayClient;

pub mod handlers;
pub mod models;

pub fn create_router(relay: Arc<RelayClient>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/minwon", get(handlers::minwon_handler))
        .with_state(relay)
        .layer(cors)
}

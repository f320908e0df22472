//! HTTP layer: routing, CORS and request tracing around [`GrievanceService`].

pub mod handlers;
pub mod health;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::grievance::GrievanceService;

#[derive(Clone, Default)]
pub struct AppState {
    pub service: Arc<GrievanceService>,
}

impl AppState {
    pub fn new(service: GrievanceService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/classify", post(handlers::classify))
        .route("/respond", post(handlers::respond))
        .route("/process", post(handlers::process))
        .route("/analytics", get(handlers::analytics))
        .route("/templates", get(handlers::templates))
        .route("/bulk-classify", post(handlers::bulk_classify));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

//! Route table and middleware stack.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

use crate::domain::GatewayConfig;
use crate::handlers::{self, AppState};
use crate::middleware::{create_cors_layer, HttpMetricsLayer, TracingLayer};

/// Build the HTTP router.
///
/// | Method | Path | Handler |
/// |--------|------|---------|
/// | GET | `/`, `/api/riddle` | riddle and current stats |
/// | POST | `/api/secrets` | submit a secret |
/// | GET | `/api/secrets` | all secrets, shuffled |
/// | GET | `/api/secrets/:id` | one secret |
/// | GET | `/api/stats` | store counts |
/// | GET | `/api/exposed` | next wall page, plain text |
/// | GET | `/health` | liveness |
/// | GET | `/metrics` | Prometheus exposition |
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(create_cors_layer(&config.cors))
        .layer(TracingLayer::new())
        .layer(HttpMetricsLayer::new())
        .layer(TimeoutLayer::new(config.timeouts.request));

    Router::new()
        .route("/", get(handlers::riddle))
        .route("/api/riddle", get(handlers::riddle))
        .route("/api/secrets", post(handlers::submit).get(handlers::list))
        .route("/api/secrets/:id", get(handlers::get_secret))
        .route("/api/stats", get(handlers::stats))
        .route("/api/exposed", get(handlers::exposed))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware)
        .with_state(state)
}

//! Middleware stack for the gateway.
//!
//! Applied outermost first:
//!
//! 1. CORS (tower-http)
//! 2. Request tracing span
//! 3. Prometheus request metrics
//! 4. Request timeout (tower-http)

pub mod cors;
pub mod metrics;
pub mod tracing;

pub use cors::create_cors_layer;
pub use self::metrics::{HttpMetricsLayer, UNMATCHED_ROUTE};
pub use self::tracing::TracingLayer;

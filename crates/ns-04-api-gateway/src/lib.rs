//! # NS-04 API Gateway
//!
//! HTTP surface of Nexus Secrets.
//!
//! ## Architecture
//!
//! ```text
//!  request ─→ CORS ─→ tracing span ─→ metrics ─→ timeout ─→ handler
//!                                                             │
//!                                   ┌─────────────────────────┴───────┐
//!                                   ↓                                 ↓
//!                          Arc<dyn AdmissionApi>                 Arc<Wall>
//!                          submit / get / list / stats           page / snapshot
//! ```
//!
//! ## Error Contract
//!
//! Every error body is `{"error": "<message>"}`:
//!
//! | Status | Message |
//! |--------|---------|
//! | 400 | `invalid request body` |
//! | 400 | `value is required` |
//! | 404 | `secret not found` |
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let service = GatewayService::new(GatewayConfig::default(), store, wall)?;
//! let listener = service.bind().await?;
//! service.serve(listener, shutdown_signal()).await?;
//! ```

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;

// Re-exports for convenience
pub use domain::{
    ApiError, CorsConfig, ErrorBody, GatewayConfig, GatewayConfigError, GatewayError,
    HealthResponse, HttpConfig, RiddleResponse, SubmitRequest, TimeoutConfig, DEFAULT_PORT,
    EMPTY_WALL_MESSAGE, SERVICE_NAME,
};
pub use handlers::AppState;
pub use router::build_router;
pub use service::GatewayService;

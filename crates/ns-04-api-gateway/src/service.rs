//! Gateway service: owns the router and runs the HTTP server.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use ns_02_admission::AdmissionApi;
use ns_03_wall::Wall;
use tokio::net::TcpListener;
use tracing::info;

use crate::domain::{GatewayConfig, GatewayError};
use crate::handlers::AppState;
use crate::router::build_router;

/// HTTP front end over an admission store and a wall.
pub struct GatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl GatewayService {
    /// Validate the configuration and register HTTP metrics.
    pub fn new(
        config: GatewayConfig,
        store: Arc<dyn AdmissionApi>,
        wall: Arc<Wall>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        ns_telemetry::register_metrics()?;

        Ok(Self {
            config,
            state: AppState { store, wall },
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Bind the configured address. Port 0 picks an ephemeral port.
    pub async fn bind(&self) -> Result<TcpListener, GatewayError> {
        let addr = self.config.http_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        if let Ok(addr) = listener.local_addr() {
            info!(%addr, "Starting HTTP server");
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(GatewayError::Serve)?;

        info!("HTTP server stopped");
        Ok(())
    }
}

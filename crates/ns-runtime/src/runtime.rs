//! Runtime: owns every component and their background tasks.

use std::net::SocketAddr;
use std::sync::Arc;

use ns_02_admission::{AdmissionApi, AdmissionService};
use ns_03_wall::{ExposedSource, RefresherHandle, Wall, WallError};
use ns_04_api_gateway::{GatewayError, GatewayService};
use ns_telemetry::log_event;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::NodeConfig;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Wall(#[from] WallError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("runtime already started")]
    AlreadyStarted,
}

/// The Nexus Secrets process.
///
/// ## Startup Sequence
///
/// 1. Build the admission store
/// 2. Build the wall over the store (first snapshot taken immediately)
/// 3. Build the gateway over both
/// 4. `start`: bind, spawn the wall refresher, spawn the HTTP server
pub struct SecretsRuntime {
    store: Arc<AdmissionService>,
    wall: Arc<Wall>,
    gateway: Option<GatewayService>,
    refresher: Option<RefresherHandle>,
    server: Option<JoinHandle<Result<(), GatewayError>>>,
    shutdown_tx: watch::Sender<bool>,
}

impl SecretsRuntime {
    pub fn new(config: NodeConfig) -> Result<Self, RuntimeError> {
        info!("Creating Nexus Secrets runtime");

        let store = Arc::new(AdmissionService::new());
        info!(lenses = ?store.lens_names(), "Admission store ready");
        let source: Arc<dyn ExposedSource> = store.clone();
        let wall = Arc::new(Wall::new(source, config.wall)?);

        let api: Arc<dyn AdmissionApi> = store.clone();
        let gateway = GatewayService::new(config.gateway, api, Arc::clone(&wall))?;

        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            store,
            wall,
            gateway: Some(gateway),
            refresher: None,
            server: None,
            shutdown_tx,
        })
    }

    pub fn store(&self) -> &Arc<AdmissionService> {
        &self.store
    }

    pub fn wall(&self) -> &Arc<Wall> {
        &self.wall
    }

    /// Bind the listener and spawn background tasks.
    ///
    /// Returns the bound address, which differs from the configured one when
    /// port 0 was requested.
    pub async fn start(&mut self) -> Result<SocketAddr, RuntimeError> {
        let gateway = self.gateway.take().ok_or(RuntimeError::AlreadyStarted)?;

        let listener = gateway.bind().await?;
        let addr = listener
            .local_addr()
            .map_err(|source| GatewayError::Bind {
                addr: gateway.config().http_addr(),
                source,
            })?;

        self.refresher = Some(Arc::clone(&self.wall).spawn_refresher());

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let signal = async move {
            // Resolves on the first send, or when the sender is dropped
            let _ = shutdown_rx.changed().await;
        };
        self.server = Some(tokio::spawn(gateway.serve(listener, signal)));

        log_event!(info, "runtime", "Nexus Secrets is listening", %addr);
        Ok(addr)
    }

    /// Stop the server and the refresher, waiting for both.
    pub async fn shutdown(&mut self) {
        info!("Shutting down Nexus Secrets");
        let _ = self.shutdown_tx.send(true);

        if let Some(refresher) = self.refresher.take() {
            if refresher.is_finished() {
                warn!("Wall refresher exited before shutdown");
            }
            refresher.stop().await;
        }

        if let Some(server) = self.server.take() {
            match server.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!(error = %e, "HTTP server exited with error"),
                Err(e) => warn!(error = %e, "HTTP server task failed"),
            }
        }

        let stats = self.store.stats();
        log_event!(
            info,
            "runtime",
            "Shutdown complete",
            total = stats.total,
            exposed = stats.exposed
        );
    }
}

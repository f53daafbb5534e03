//! Process configuration loaded from the environment.

use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use ns_03_wall::{WallConfig, WallError};
use ns_04_api_gateway::{GatewayConfig, GatewayConfigError};
use thiserror::Error;
use tracing::{info, warn};

/// Everything the runtime needs to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    pub gateway: GatewayConfig,
    pub wall: WallConfig,
}

impl NodeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        self.wall.validate()?;
        Ok(())
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.gateway.http.port = port;
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gateway config: {0}")]
    Gateway(#[from] GatewayConfigError),

    #[error("wall config: {0}")]
    Wall(#[from] WallError),
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<NodeConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// | Variable | Default |
/// |----------|---------|
/// | `PORT`, then `SECRETS_PORT` | `8082` |
/// | `NS_HOST` | `0.0.0.0` |
/// | `NS_WALL_PAGE_SIZE` | `1000` |
/// | `NS_WALL_REFRESH_SECS` | `5` |
/// | `NS_REQUEST_TIMEOUT_SECS` | `10` |
///
/// Values that fail to parse are logged and ignored.
pub fn load_config_from<F>(lookup: F) -> Result<NodeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = NodeConfig::default();

    // PORT wins over SECRETS_PORT (hosting platforms inject PORT)
    if let Some(port) = parse_var::<u16, _>(&lookup, "PORT")
        .or_else(|| parse_var::<u16, _>(&lookup, "SECRETS_PORT"))
    {
        config.gateway.http.port = port;
    }

    if let Some(host) = parse_var::<IpAddr, _>(&lookup, "NS_HOST") {
        config.gateway.http.host = host;
    }

    if let Some(size) = parse_var::<usize, _>(&lookup, "NS_WALL_PAGE_SIZE") {
        config.wall.page_size = size;
    }

    if let Some(secs) = parse_var::<u64, _>(&lookup, "NS_WALL_REFRESH_SECS") {
        config.wall.refresh_interval = Duration::from_secs(secs);
    }

    if let Some(secs) = parse_var::<u64, _>(&lookup, "NS_REQUEST_TIMEOUT_SECS") {
        config.gateway.timeouts.request = Duration::from_secs(secs);
    }

    config.validate()?;

    info!(
        addr = %config.gateway.http_addr(),
        page_size = config.wall.page_size,
        refresh = ?config.wall.refresh_interval,
        "Configuration loaded"
    );
    Ok(config)
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}

//! Gateway configuration with validation.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Port used when neither `PORT` nor `SECRETS_PORT` is set.
pub const DEFAULT_PORT: u16 = 8082;

/// Everything the HTTP layer needs besides the store and the wall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub http: HttpConfig,
    pub timeouts: TimeoutConfig,
    pub cors: CorsConfig,
}

impl GatewayConfig {
    /// Reject values that would only fail later, at bind or layer build time.
    pub fn validate(&self) -> Result<(), GatewayConfigError> {
        if self.timeouts.request.is_zero() {
            return Err(GatewayConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }

        if self.cors.enabled {
            for origin in &self.cors.allowed_origins {
                if origin != "*" && HeaderValue::from_str(origin).is_err() {
                    return Err(GatewayConfigError::InvalidOrigin(origin.clone()));
                }
            }
        }

        Ok(())
    }

    /// Socket address the listener binds.
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// Listener address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: IpAddr,
    /// Port (default: 8082, 0 for an ephemeral port)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upper bound on handling a single request
    #[serde(with = "duration_text")]
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
        }
    }
}

/// Browser access rules. The riddle is meant to be played from any page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    /// `"*"` allows any origin
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    /// Allowed headers ("*" for all)
    pub allowed_headers: Vec<String>,
    /// Headers readable by browser clients
    pub expose_headers: Vec<String>,
    /// Max age for preflight cache, in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".into()],
            allowed_methods: ["GET", "POST", "OPTIONS"].map(String::from).to_vec(),
            allowed_headers: vec!["Content-Type".into()],
            expose_headers: ["X-Exposed-Total", "X-Exposed-Page", "X-Exposed-Pages"]
                .map(String::from)
                .to_vec(),
            max_age: 24 * 60 * 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayConfigError {
    #[error("bad timeout: {0}")]
    InvalidTimeout(String),
    /// CORS origin that is not a valid header value
    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),
}

/// Durations as `"10s"`, `"250ms"`, `"2m"` or a bare number of seconds.
mod duration_text {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let text = match value.subsec_nanos() {
            0 => format!("{}s", value.as_secs()),
            _ => format!("{}ms", value.as_millis()),
        };
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Secs(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Secs(secs) => Ok(Duration::from_secs(secs)),
            Raw::Text(text) => parse(&text).ok_or_else(|| {
                de::Error::custom(format!("unrecognized duration {text:?}"))
            }),
        }
    }

    pub(super) fn parse(text: &str) -> Option<Duration> {
        let text = text.trim();
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (digits, unit) = text.split_at(split);
        let n: u64 = digits.parse().ok()?;

        match unit.trim() {
            "" | "s" => Some(Duration::from_secs(n)),
            "ms" => Some(Duration::from_millis(n)),
            "m" => n.checked_mul(60).map(Duration::from_secs),
            _ => None,
        }
    }
}

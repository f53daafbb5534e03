//! # Nexus Secrets Runtime
//!
//! Wires the admission store, the wall, and the HTTP gateway into one
//! process. The `nexus-secrets` binary is a thin shell around this library.
//!
//! ## Component Graph
//!
//! ```text
//!              ┌──────────────────────┐
//!              │  AdmissionService    │←──── submit / get / list / stats
//!              └──────────┬───────────┘                    ↑
//!                         │ exposed_values()               │
//!                         ↓                                │
//!              ┌──────────────────────┐           ┌────────┴────────┐
//!  refresher ─→│  Wall (page cache)   │←── page ──│ GatewayService  │←── HTTP
//!              └──────────────────────┘           └─────────────────┘
//! ```

pub mod config;
pub mod runtime;

pub use config::{load_config, load_config_from, ConfigError, NodeConfig};
pub use runtime::{RuntimeError, SecretsRuntime};

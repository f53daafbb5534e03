//! Cross-crate integration tests.

pub mod admission_flows;
pub mod http_gateway;
pub mod runtime_http;
pub mod wall_rotation;

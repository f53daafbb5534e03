//! Ports layer for the admission store.
//!
//! - Inbound: `AdmissionApi`, the driving API used by the gateway and the wall
//! - Outbound: `TimeSource`, the only thing the store needs from outside

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

//! Ports layer for the wall.

pub mod outbound;

pub use outbound::*;

//! # Domain Layer - Wall
//!
//! - `config`: WallConfig and its builder
//! - `pages`: PageSet (immutable snapshot) and WallPage (read result)

pub mod config;
pub mod pages;

pub use config::*;
pub use pages::*;

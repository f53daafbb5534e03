//! # NS-03 Wall
//!
//! Rotating, paginated view of every exposed secret.
//!
//! ## Architecture
//!
//! ```text
//!  ExposedSource ──(every refresh_interval)──→ PageSet::build ──swap──→ RwLock<Arc<PageSet>>
//!                                                                          │
//!                               reader ──page()──→ clone Arc, fetch_add ──┘
//! ```
//!
//! - The source is polled, never mutated
//! - A rebuilt `PageSet` is published by swapping one `Arc`; readers holding
//!   the previous snapshot keep a consistent view
//! - `page()` never waits on the source, only on the wall's own brief lock
//!
//! ## Invariants
//!
//! - **Zero state**: no exposed secrets means `WallPage::empty()`
//! - **Single page**: with N ≤ page_size every call returns the same page
//! - **Round robin**: over `total_pages` consecutive calls each page index
//!   appears exactly once
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ns_02_admission::AdmissionService;
//! use ns_03_wall::{Wall, WallConfig};
//!
//! let store = Arc::new(AdmissionService::new());
//! let wall = Arc::new(Wall::new(store, WallConfig::default())?);
//! let refresher = Arc::clone(&wall).spawn_refresher();
//!
//! let page = wall.page();
//! refresher.stop().await;
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    PageSet, WallConfig, WallConfigBuilder, WallPage, WallSnapshot, DEFAULT_PAGE_SIZE,
    DEFAULT_REFRESH_INTERVAL,
};
pub use error::WallError;
pub use ports::ExposedSource;
pub use service::{RefresherHandle, Wall};

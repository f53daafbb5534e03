//! Service layer: the wall and its background refresher.

mod wall_service;

pub use wall_service::{RefresherHandle, Wall};

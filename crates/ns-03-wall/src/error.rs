//! Wall error types.

use std::time::Duration;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WallError {
    #[error("page size must be at least 1, got {size}")]
    InvalidPageSize { size: usize },

    #[error("refresh interval must be non-zero, got {interval:?}")]
    InvalidRefreshInterval { interval: Duration },
}

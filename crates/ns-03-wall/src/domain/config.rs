//! Wall configuration and validation
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ns_03_wall::WallConfigBuilder;
//!
//! let config = WallConfigBuilder::new()
//!     .page_size(250)
//!     .refresh_interval(Duration::from_secs(2))
//!     .build()
//!     .unwrap();
//! assert_eq!(config.page_size, 250);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::WallError;

/// Exposed values per page.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Time between rebuilds of the page cache.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallConfig {
    /// Maximum exposed values joined into one page (at least 1)
    pub page_size: usize,
    /// Background rebuild period (non-zero)
    pub refresh_interval: Duration,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl WallConfig {
    pub fn validate(&self) -> Result<(), WallError> {
        if self.page_size == 0 {
            return Err(WallError::InvalidPageSize {
                size: self.page_size,
            });
        }

        if self.refresh_interval.is_zero() {
            return Err(WallError::InvalidRefreshInterval {
                interval: self.refresh_interval,
            });
        }

        Ok(())
    }

    /// Builder-style method to set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builder-style method to set the refresh interval
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

/// Builder for WallConfig with validation
#[derive(Default)]
pub struct WallConfigBuilder {
    page_size: Option<usize>,
    refresh_interval: Option<Duration>,
}

impl WallConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = Some(interval);
        self
    }

    /// Build the WallConfig, validating all parameters
    pub fn build(self) -> Result<WallConfig, WallError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation (for testing)
    pub fn build_unchecked(self) -> WallConfig {
        let defaults = WallConfig::default();
        WallConfig {
            page_size: self.page_size.unwrap_or(defaults.page_size),
            refresh_interval: self.refresh_interval.unwrap_or(defaults.refresh_interval),
        }
    }
}

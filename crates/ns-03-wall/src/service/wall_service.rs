//! Wall Service
//!
//! Serves pages from a cached `PageSet` and rebuilds the cache on a timer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::domain::{PageSet, WallConfig, WallPage, WallSnapshot};
use crate::error::WallError;
use crate::ports::ExposedSource;

/// Round-robin view over all exposed secrets.
///
/// Readers clone the current `Arc<PageSet>` under a brief read lock and never
/// touch the source. `refresh` builds a new set before taking the write lock.
pub struct Wall {
    source: Arc<dyn ExposedSource>,
    config: WallConfig,
    pages: RwLock<Arc<PageSet>>,
    counter: AtomicU64,
}

impl Wall {
    /// Create a wall and build its first snapshot.
    pub fn new(source: Arc<dyn ExposedSource>, config: WallConfig) -> Result<Self, WallError> {
        config.validate()?;

        let wall = Self {
            source,
            config,
            pages: RwLock::new(Arc::new(PageSet::default())),
            counter: AtomicU64::new(0),
        };
        wall.refresh();
        Ok(wall)
    }

    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Rebuild the page cache from the source and publish it.
    pub fn refresh(&self) -> WallSnapshot {
        let values = self.source.exposed_values();
        let set = Arc::new(PageSet::build(&values, self.config.page_size));
        let snapshot = WallSnapshot::from(set.as_ref());

        *self.pages.write() = set;

        debug!(
            total_exposed = snapshot.total_exposed,
            total_pages = snapshot.total_pages,
            "Wall refreshed"
        );
        snapshot
    }

    /// The next page in round-robin order.
    ///
    /// Each call advances a shared counter, so concurrent readers are spread
    /// across pages. With zero pages this returns `WallPage::empty()`.
    pub fn page(&self) -> WallPage {
        let set = Arc::clone(&self.pages.read());
        let total_pages = set.page_count();
        if total_pages == 0 {
            return WallPage::empty();
        }

        let ticket = self.counter.fetch_add(1, Ordering::Relaxed);
        let page_index = (ticket % total_pages as u64) as usize;

        WallPage {
            text: set.get(page_index).unwrap_or_default().to_string(),
            page_index,
            total_pages,
            total_exposed: set.total_exposed(),
        }
    }

    /// Counts of the published snapshot, without advancing the counter.
    pub fn snapshot(&self) -> WallSnapshot {
        WallSnapshot::from(self.pages.read().as_ref())
    }

    /// Start the background refresh loop.
    ///
    /// The loop runs until `RefresherHandle::stop` is called or the handle is
    /// dropped.
    pub fn spawn_refresher(self: Arc<Self>) -> RefresherHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let period = self.config.refresh_interval;
        let page_size = self.config.page_size;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick completes immediately; `new` already built a snapshot
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        self.refresh();
                    }
                }
            }
            debug!("Wall refresher stopped");
        });

        info!(interval = ?period, page_size, "Wall refresher started");
        RefresherHandle {
            stop_tx: Some(stop_tx),
            task,
        }
    }
}

/// Owner of a running refresh loop.
pub struct RefresherHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl RefresherHandle {
    /// Signal the loop to exit and wait for it.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            warn!(error = %e, "Wall refresher task failed");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

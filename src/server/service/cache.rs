//! Cache invalidation bus and the in-process dashboard cache.
//!
//! Every successful admin mutation emits a [`CacheInvalidation`] on the [`CacheEvents`]
//! bus. The bus bumps an epoch counter before broadcasting, and the [`DashboardCache`]
//! only serves an aggregate loaded under the current epoch. A read that starts after a
//! mutation returned therefore always goes back to the database.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tokio::sync::{broadcast, RwLock};

use crate::server::{error::AppError, model::dashboard::Dashboard};

/// Capacity of the broadcast channel before slow subscribers start lagging.
const CHANNEL_CAPACITY: usize = 64;

/// Cached query affected by an invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey {
    Dashboard,
}

impl CacheKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
        }
    }
}

/// Event broadcast after a mutation changed the data behind `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheInvalidation {
    pub key: CacheKey,
    /// Epoch the bus moved to when this event was emitted.
    pub epoch: u64,
}

/// Invalidation bus shared by every request handler.
#[derive(Clone)]
pub struct CacheEvents {
    epoch: Arc<AtomicU64>,
    sender: broadcast::Sender<CacheInvalidation>,
}

impl CacheEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            epoch: Arc::new(AtomicU64::new(0)),
            sender,
        }
    }

    /// Current invalidation epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Bumps the epoch and notifies subscribers that `key` is stale.
    ///
    /// Having no subscribers is not an error; the epoch alone invalidates the
    /// [`DashboardCache`].
    ///
    /// # Returns
    /// - `CacheInvalidation` - The emitted event
    pub fn emit(&self, key: CacheKey) -> CacheInvalidation {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let event = CacheInvalidation { key, epoch };

        if self.sender.send(event).is_err() {
            tracing::trace!("No subscribers for {} invalidation", key.as_str());
        }

        event
    }

    /// Subscribes to future invalidation events.
    pub fn subscribe(&self) -> broadcast::Receiver<CacheInvalidation> {
        self.sender.subscribe()
    }
}

impl Default for CacheEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Dashboard aggregate tagged with the epoch it was loaded under.
#[derive(Clone)]
pub struct DashboardCache {
    entry: Arc<RwLock<Option<(u64, Dashboard)>>>,
    events: CacheEvents,
}

impl DashboardCache {
    /// Creates an empty cache bound to the given invalidation bus.
    pub fn new(events: CacheEvents) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            events,
        }
    }

    /// Returns the cached dashboard, loading it with `load` when missing or stale.
    ///
    /// The epoch is captured before loading and stored with the result. If a mutation
    /// lands while `load` runs, the stored entry is already stale and the next read
    /// reloads.
    ///
    /// # Arguments
    /// - `load` - Loads a fresh aggregate from the database
    ///
    /// # Returns
    /// - `Ok(Dashboard)` - Cached or freshly loaded aggregate
    /// - `Err(AppError)` - `load` failed; nothing is cached
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Dashboard, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Dashboard, AppError>>,
    {
        let epoch = self.events.epoch();

        if let Some((cached_epoch, dashboard)) = self.entry.read().await.as_ref() {
            if *cached_epoch == epoch {
                return Ok(dashboard.clone());
            }
        }

        let dashboard = load().await?;

        let mut entry = self.entry.write().await;
        let newer_cached = matches!(entry.as_ref(), Some((cached_epoch, _)) if *cached_epoch > epoch);
        if !newer_cached {
            *entry = Some((epoch, dashboard.clone()));
        }

        Ok(dashboard)
    }

    /// Checks whether a dashboard for the current epoch is cached.
    #[cfg(test)]
    pub async fn is_fresh(&self) -> bool {
        matches!(
            self.entry.read().await.as_ref(),
            Some((cached_epoch, _)) if *cached_epoch == self.events.epoch()
        )
    }
}

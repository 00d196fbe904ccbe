//! Caching layer for driving distances.
//!
//! Driving distances between two cities are effectively static, so entries
//! never expire and the cache is unbounded: it lives as long as the process.
//! Keys are ordered `(from, to)` pairs; the reverse direction is cached
//! separately.
//!
//! Only successful lookups are cached. A failed lookup is retried the next
//! time it is asked for.

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::Place;
use crate::planner::{DistanceOracle, Drive};

/// Cache key: (from, to).
type RouteKey = (Place, Place);

/// Distance oracle with a read-through cache in front.
///
/// Safe to share between concurrent requests.
pub struct CachedDistanceOracle<D> {
    inner: D,
    cache: MokaCache<RouteKey, Drive>,
}

impl<D> CachedDistanceOracle<D> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            cache: MokaCache::builder().build(),
        }
    }

    /// Access the underlying oracle for lookups that bypass the cache.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Get cache statistics (for monitoring).
    ///
    /// The count is approximate until pending maintenance has run.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<D: DistanceOracle> DistanceOracle for CachedDistanceOracle<D> {
    async fn driving_distance(&self, from: &Place, to: &Place) -> Option<Drive> {
        let key = (from.clone(), to.clone());

        if let Some(drive) = self.cache.get(&key).await {
            trace!(%from, %to, miles = drive.miles, "Distance cache hit");
            return Some(drive);
        }

        let drive = self.inner.driving_distance(from, to).await?;
        self.cache.insert(key, drive).await;
        Some(drive)
    }
}

//! Coalescing query cache.
//!
//! One slot per [`QueryKey`]. Each slot is guarded by its own async mutex,
//! so concurrent callers for the same key serialize on the slot: the first
//! runs the fetch, the rest find the freshly stored value when the lock is
//! released. This makes the de-duplication contract explicit — at most one
//! network request is in flight per distinct key at any time, while
//! different keys never contend.
//!
//! The cache is an explicitly constructed object owned by the client (no
//! module-level singleton); dropping the client drops the cache.

use crate::error::HttpError;
use crate::query::QueryKey;

use async_lock::{Mutex, RwLock};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Default)]
struct Slot {
    value: Option<(Arc<serde_json::Value>, Instant)>,
}

/// TTL cache over raw JSON query results, keyed by [`QueryKey`].
pub struct QueryCache {
    ttl: Duration,
    slots: RwLock<HashMap<QueryKey, Arc<Mutex<Slot>>>>,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value for `key`, or run `fetch` and store its result.
    ///
    /// Errors are not cached: a failed fetch leaves the slot empty, so the
    /// next caller retries. Cancellation is best-effort — dropping the
    /// returned future before completion aborts the in-flight request and
    /// leaves the slot unchanged.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: QueryKey,
        fetch: F,
    ) -> Result<Arc<serde_json::Value>, HttpError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<serde_json::Value, HttpError>>,
    {
        let slot = {
            let mut slots = self.slots.write().await;
            slots
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(Slot::default())))
                .clone()
        };

        // Same-key callers queue here; a coalesced caller wakes up to a
        // fresh value and returns without fetching.
        let mut guard = slot.lock().await;
        if let Some((value, stored_at)) = &guard.value {
            if stored_at.elapsed() < self.ttl {
                debug!(key = %key, "query cache hit");
                return Ok(value.clone());
            }
        }

        debug!(key = %key, "query cache miss, fetching");
        let fetched = fetch().await?;
        let value = Arc::new(fetched);
        guard.value = Some((value.clone(), Instant::now()));
        Ok(value)
    }

    /// Drop the entry for `key`, forcing the next call to refetch.
    pub async fn invalidate(&self, key: &QueryKey) {
        self.slots.write().await.remove(key);
    }

    /// Drop all entries.
    pub async fn clear(&self) {
        self.slots.write().await.clear();
    }
}

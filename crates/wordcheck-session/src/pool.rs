// Bounded blocking pool of loaded dictionary resources
//
// Dictionary loading is expensive, so a fixed number of resources is created
// up front and borrowed per lookup. Acquisition blocks with a bounded wait;
// a timed-out acquire yields an explicitly invalid handle instead of an
// error, and callers degrade to the empty non-typo result.

use std::time::{Duration, Instant};

use hashbrown::HashSet;
use parking_lot::{Condvar, Mutex};
use thiserror::Error;
use tracing::warn;

use crate::dictionary::{DictionaryError, DictionaryFactory, DictionaryResource};

/// Failure to construct a pool.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to load dictionary resource {index} of {count}")]
    Load {
        index: usize,
        count: usize,
        #[source]
        source: DictionaryError,
    },
}

struct PooledEntry {
    id: u64,
    resource: DictionaryResource,
}

struct PoolInner {
    idle: Vec<PooledEntry>,
    /// Ids currently lent out. A release of an id not in this set is a
    /// misuse and is refused.
    outstanding: HashSet<u64>,
}

/// A fixed-size pool of dictionary resources shared by concurrent requests.
///
/// One pool exists per active locale. No resource is ever lent to two
/// requests at once, and resources are reused, never recreated per request.
pub struct DictionaryPool {
    inner: Mutex<PoolInner>,
    available: Condvar,
    default_timeout: Duration,
    size: usize,
}

impl DictionaryPool {
    /// Create a pool of `size` resources, loading each one eagerly through
    /// the factory.
    pub fn new(
        factory: &dyn DictionaryFactory,
        locale: &str,
        size: usize,
        default_timeout: Duration,
    ) -> Result<Self, PoolError> {
        let mut idle = Vec::with_capacity(size);
        for index in 0..size {
            let resource = factory.create(locale).map_err(|source| PoolError::Load {
                index,
                count: size,
                source,
            })?;
            idle.push(PooledEntry {
                id: index as u64,
                resource,
            });
        }
        Ok(Self {
            inner: Mutex::new(PoolInner {
                idle,
                outstanding: HashSet::new(),
            }),
            available: Condvar::new(),
            default_timeout,
            size,
        })
    }

    /// Number of resources the pool was built with.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow a resource, waiting up to `timeout` for one to become
    /// available. On timeout the returned handle is invalid; callers must
    /// check [`DictionaryHandle::is_valid`] before use.
    pub fn acquire(&self, timeout: Duration) -> DictionaryHandle<'_> {
        let deadline = Instant::now() + timeout;
        let mut inner = self.inner.lock();
        while inner.idle.is_empty() {
            if self.available.wait_until(&mut inner, deadline).timed_out() {
                break;
            }
        }
        let entry = inner.idle.pop();
        if let Some(entry) = &entry {
            inner.outstanding.insert(entry.id);
        }
        DictionaryHandle { pool: self, entry }
    }

    /// Borrow a resource with the pool's construction-time timeout.
    pub fn acquire_default(&self) -> DictionaryHandle<'_> {
        self.acquire(self.default_timeout)
    }

    /// Return a borrowed entry. `false` means the entry was not outstanding
    /// (already returned, or never lent by this pool); the caller logs that
    /// and continues.
    fn release(&self, entry: PooledEntry) -> bool {
        let mut inner = self.inner.lock();
        if !inner.outstanding.remove(&entry.id) {
            return false;
        }
        inner.idle.push(entry);
        drop(inner);
        self.available.notify_one();
        true
    }

    #[cfg(test)]
    fn idle_count(&self) -> usize {
        self.inner.lock().idle.len()
    }
}

/// A borrowed dictionary resource, returned to its pool on drop.
///
/// The drop-based return runs on every exit path, including unwinding, so
/// a borrowed resource is never leaked by an early return or a panic.
pub struct DictionaryHandle<'a> {
    pool: &'a DictionaryPool,
    entry: Option<PooledEntry>,
}

impl DictionaryHandle<'_> {
    /// Whether the handle actually holds a resource. An invalid handle
    /// means the pool could not supply one within the wait budget.
    pub fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// The borrowed resource, if the handle is valid.
    pub fn resource(&self) -> Option<&DictionaryResource> {
        self.entry.as_ref().map(|e| &e.resource)
    }
}

impl Drop for DictionaryHandle<'_> {
    fn drop(&mut self) {
        if let Some(entry) = self.entry.take() {
            if !self.pool.release(entry) {
                warn!("could not re-insert a dictionary resource into its pool");
            }
        }
    }
}

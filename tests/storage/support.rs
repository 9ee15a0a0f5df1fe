//! Shared fixtures: a medium that counts writes and fast repositories.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use shopvault::{
    InMemoryMedium, Latency, LocalRepository, Medium, MediumError, Record, Store, WriteGuard,
};

/// In-memory medium that records how many times each key was written.
#[derive(Clone, Default)]
pub struct CountingMedium {
    inner: InMemoryMedium,
    sets: Arc<Mutex<HashMap<String, usize>>>,
}

impl CountingMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(&self, key: &str) -> usize {
        self.sets.lock().get(key).copied().unwrap_or(0)
    }
}

impl Medium for CountingMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), MediumError> {
        *self.sets.lock().entry(key.to_string()).or_default() += 1;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, MediumError> {
        self.inner.remove(key)
    }

    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }

    fn usage(&self) -> usize {
        self.inner.usage()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

pub fn memory_store() -> Arc<Store> {
    Arc::new(Store::new(InMemoryMedium::new()))
}

/// Counting medium plus a store over a shared handle to it.
pub fn counting_store() -> (CountingMedium, Arc<Store>) {
    let medium = CountingMedium::new();
    let store = Arc::new(Store::new(medium.clone()));
    (medium, store)
}

/// Local repository with no simulated latency.
pub fn fast_local<R: Record>(store: &Arc<Store>, defaults: Vec<R>) -> LocalRepository<R> {
    LocalRepository::new(store.clone(), defaults).with_latency(Latency::none())
}

/// Local repository with a short, uniform delay so concurrent mutations overlap.
pub fn slow_local<R: Record>(
    store: &Arc<Store>,
    defaults: Vec<R>,
    guard: WriteGuard,
) -> LocalRepository<R> {
    LocalRepository::new(store.clone(), defaults)
        .with_latency(Latency::uniform(std::time::Duration::from_millis(50)))
        .with_write_guard(guard)
}

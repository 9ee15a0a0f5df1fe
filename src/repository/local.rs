//! LocalRepository - CRUD over one collection in the [`Store`].
//!
//! Every mutation reads the whole collection, changes it in memory and
//! writes the whole collection back. Storage failures never reach the
//! caller; they are absorbed by the store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;
use tracing::debug;

use crate::record::{Record, RecordId};
use crate::store::Store;

use super::error::RepositoryError;
use super::repository::Repository;

/// Simulated network delay per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            create: Duration::from_millis(500),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(300),
        }
    }
}

impl Latency {
    /// No simulated delay at all.
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }
}

/// Where `create` puts the new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Append,
    Prepend,
}

/// How concurrent mutations of one collection interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteGuard {
    /// Mutations of a collection run one at a time, each seeing the
    /// previous one's result.
    #[default]
    Serialized,
    /// No guard: a mutation's snapshot may be stale by the time it is
    /// persisted, and the later whole-collection write wins.
    LastWriteWins,
}

/// Repository over a single collection in a local [`Store`].
pub struct LocalRepository<R> {
    store: Arc<Store>,
    defaults: Vec<R>,
    latency: Latency,
    placement: Placement,
    guard: WriteGuard,
}

impl<R: Record> LocalRepository<R> {
    /// Create a repository seeded with `defaults` on first access.
    pub fn new(store: Arc<Store>, defaults: Vec<R>) -> Self {
        Self {
            store,
            defaults,
            latency: Latency::default(),
            placement: Placement::default(),
            guard: WriteGuard::default(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_write_guard(mut self, guard: WriteGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn defaults(&self) -> &[R] {
        &self.defaults
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Load the collection, persisting the default dataset if it is empty.
    fn load_seeded(&self) -> Vec<R> {
        let stored = self.store.read_collection::<R>(R::COLLECTION);
        if !stored.is_empty() || self.defaults.is_empty() {
            return stored;
        }

        debug!(
            collection = R::COLLECTION,
            count = self.defaults.len(),
            "seeding collection with default dataset"
        );
        self.persist(&self.defaults);
        self.defaults.clone()
    }

    fn persist(&self, records: &[R]) {
        let outcome = self.store.write_collection(R::COLLECTION, records);
        if !outcome.evicted().is_empty() {
            debug!(
                collection = R::COLLECTION,
                evicted = ?outcome.evicted(),
                stored = outcome.is_stored(),
                "collection write evicted other collections"
            );
        }
    }

    async fn acquire(&self) -> Option<OwnedMutexGuard<()>> {
        match self.guard {
            WriteGuard::Serialized => Some(
                self.store
                    .collection_guard(R::COLLECTION)
                    .lock_owned()
                    .await,
            ),
            WriteGuard::LastWriteWins => None,
        }
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl<R: Record> Repository<R> for LocalRepository<R> {
    async fn list(&self) -> Result<Vec<R>, RepositoryError> {
        simulate(self.latency.list).await;
        Ok(self.load_seeded())
    }

    async fn create(&self, mut draft: R) -> Result<R, RepositoryError> {
        let _guard = self.acquire().await;
        let mut records = self.load_seeded();
        simulate(self.latency.create).await;

        draft.set_id(R::Id::from_stamp(R::ID_PREFIX, self.store.next_stamp()));
        match self.placement {
            Placement::Append => records.push(draft.clone()),
            Placement::Prepend => records.insert(0, draft.clone()),
        }
        self.persist(&records);

        debug!(collection = R::COLLECTION, id = %draft.id(), "record created");
        Ok(draft)
    }

    async fn update(&self, record: R) -> Result<(), RepositoryError> {
        let _guard = self.acquire().await;
        let mut records = self.store.read_collection::<R>(R::COLLECTION);
        simulate(self.latency.update).await;

        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                self.persist(&records);
            }
            None => debug!(
                collection = R::COLLECTION,
                id = %record.id(),
                "update target not found"
            ),
        }
        Ok(())
    }

    async fn delete(&self, id: &R::Id) -> Result<(), RepositoryError> {
        let _guard = self.acquire().await;
        let mut records = self.store.read_collection::<R>(R::COLLECTION);
        simulate(self.latency.delete).await;

        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            debug!(collection = R::COLLECTION, id = %id, "delete target not found");
        } else {
            self.persist(&records);
        }
        Ok(())
    }
}

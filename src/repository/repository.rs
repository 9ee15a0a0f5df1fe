use async_trait::async_trait;

use crate::record::Record;

use super::error::RepositoryError;

/// CRUD surface every entity repository exposes.
///
/// All operations are asynchronous so callers behave the same whether the
/// repository is backed by local storage (with simulated latency) or by a
/// remote service.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// All records of the collection. Seeds the default dataset on first access.
    async fn list(&self) -> Result<Vec<R>, RepositoryError>;

    /// Assign a fresh identifier to `draft`, store it and return it.
    async fn create(&self, draft: R) -> Result<R, RepositoryError>;

    /// Replace the record with the same identifier. Missing records are a no-op.
    async fn update(&self, record: R) -> Result<(), RepositoryError>;

    /// Remove the record with `id`. Missing records are a no-op.
    async fn delete(&self, id: &R::Id) -> Result<(), RepositoryError>;
}

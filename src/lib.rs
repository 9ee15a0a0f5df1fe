//! Durable, quota-aware key-value storage with a uniform repository layer.
//!
//! - [`Medium`]: raw, capacity-limited string storage (memory or files).
//! - [`Store`]: JSON encode/decode, default-on-absence reads and the
//!   eviction waterfall that frees space when a write exceeds the quota.
//! - [`Repository`]: list/create/update/delete over one collection, backed
//!   either by the store ([`LocalRepository`]) or by a REST service
//!   ([`RemoteRepository`]), chosen by [`Mode`].

extern crate self as shopvault;

pub mod catalog;
pub mod config;
mod error;
#[cfg(feature = "http")]
pub mod http;
mod id;
pub mod keys;
pub mod logging;
mod medium;
mod record;
mod repository;
mod store;

pub use config::Config;
pub use error::ConfigError;
pub use id::IdGenerator;
pub use logging::LoggingConfig;
pub use medium::{entry_size, FileMedium, InMemoryMedium, Medium, MediumError, DEFAULT_CAPACITY};
pub use record::{Record, RecordId};
pub use repository::{
    Backend, Latency, LocalRepository, Mode, Placement, RemoteRepository, Repositories, Repository,
    RepositoryError, WriteGuard,
};
pub use store::{EvictionPolicy, Store, WriteOutcome};

// Re-export the derive so `#[derive(shopvault::Record)]` works.
pub use shopvault_macros::Record;

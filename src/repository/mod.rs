//! Repositories - the uniform CRUD contract over one collection.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shopvault::{Config, InMemoryMedium, Repositories, Repository, Store};
//! use shopvault::catalog::Route;
//!
//! let store = Arc::new(Store::new(InMemoryMedium::new()));
//! let repos = Repositories::new(store, &Config::default())?;
//! let routes = repos.seeded::<Route>()?;
//!
//! let created = routes.create(draft).await?;
//! routes.delete(created.id()).await?;
//! ```

mod backend;
mod error;
mod local;
mod remote;
mod repository;

pub use backend::{Backend, Mode, Repositories};
pub use error::RepositoryError;
pub use local::{Latency, LocalRepository, Placement, WriteGuard};
pub use remote::RemoteRepository;
pub use repository::Repository;

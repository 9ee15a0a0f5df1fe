//! Mode switch: choose, per repository instance, between local storage and
//! the remote service.
//!
//! The mode is fixed when a [`Backend`] is built. Switching at runtime is an
//! explicit re-initialization ([`Repositories::switch_mode`] followed by
//! [`Backend::reinit`]); nothing migrates data between the two sides.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::record::Record;
use crate::store::Store;

use super::error::RepositoryError;
use super::local::{Latency, LocalRepository, WriteGuard};
use super::remote::RemoteRepository;
use super::repository::Repository;

/// Which side repositories talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local store with simulated latency.
    #[default]
    Local,
    /// Remote REST service.
    Remote,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Local => write!(f, "local"),
            Mode::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "mock" => Ok(Mode::Local),
            "remote" | "live" => Ok(Mode::Remote),
            other => Err(format!("unknown mode {:?}, expected local or remote", other)),
        }
    }
}

/// A repository bound to one side at construction time.
pub enum Backend<R> {
    Local(LocalRepository<R>),
    Remote(RemoteRepository<R>),
}

impl<R: Record> Backend<R> {
    pub fn mode(&self) -> Mode {
        match self {
            Backend::Local(_) => Mode::Local,
            Backend::Remote(_) => Mode::Remote,
        }
    }

    pub fn defaults(&self) -> &[R] {
        match self {
            Backend::Local(repo) => repo.defaults(),
            Backend::Remote(repo) => repo.defaults(),
        }
    }

    /// Rebuild this repository, with the same default dataset, in the mode
    /// `repositories` is currently configured for.
    pub fn reinit(self, repositories: &Repositories) -> Result<Self, RepositoryError> {
        let defaults = match self {
            Backend::Local(repo) => repo.defaults().to_vec(),
            Backend::Remote(repo) => repo.defaults().to_vec(),
        };
        repositories.backend(defaults)
    }
}

#[async_trait]
impl<R: Record> Repository<R> for Backend<R> {
    async fn list(&self) -> Result<Vec<R>, RepositoryError> {
        match self {
            Backend::Local(repo) => repo.list().await,
            Backend::Remote(repo) => repo.list().await,
        }
    }

    async fn create(&self, draft: R) -> Result<R, RepositoryError> {
        match self {
            Backend::Local(repo) => repo.create(draft).await,
            Backend::Remote(repo) => repo.create(draft).await,
        }
    }

    async fn update(&self, record: R) -> Result<(), RepositoryError> {
        match self {
            Backend::Local(repo) => repo.update(record).await,
            Backend::Remote(repo) => repo.update(record).await,
        }
    }

    async fn delete(&self, id: &R::Id) -> Result<(), RepositoryError> {
        match self {
            Backend::Local(repo) => repo.delete(id).await,
            Backend::Remote(repo) => repo.delete(id).await,
        }
    }
}

/// Factory for repositories of any record type, sharing one store, one
/// HTTP client and one configuration.
pub struct Repositories {
    store: Arc<Store>,
    client: Client,
    mode: Mode,
    api_url: String,
    latency: Latency,
    guard: WriteGuard,
}

impl Repositories {
    pub fn new(store: Arc<Store>, config: &Config) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .timeout(config.remote.timeout())
            .build()
            .map_err(RepositoryError::Client)?;

        info!(mode = %config.mode, api_url = %config.remote.api_url, "repositories configured");

        Ok(Self {
            store,
            client,
            mode: config.mode,
            api_url: config.remote.api_url.clone(),
            latency: config.latency.latency(),
            guard: WriteGuard::default(),
        })
    }

    pub fn with_write_guard(mut self, guard: WriteGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Point repositories built from now on at `mode`. Existing backends keep
    /// their side until they are re-initialized.
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!(from = %self.mode, to = %mode, "switching repository mode");
            self.mode = mode;
        }
    }

    /// Build a repository for `R` in the current mode.
    pub fn backend<R: Record>(&self, defaults: Vec<R>) -> Result<Backend<R>, RepositoryError> {
        match self.mode {
            Mode::Local => Ok(Backend::Local(self.local(defaults))),
            Mode::Remote => Ok(Backend::Remote(self.remote(defaults)?)),
        }
    }

    pub fn local<R: Record>(&self, defaults: Vec<R>) -> LocalRepository<R> {
        LocalRepository::new(self.store.clone(), defaults)
            .with_latency(self.latency)
            .with_write_guard(self.guard)
    }

    pub fn remote<R: Record>(
        &self,
        defaults: Vec<R>,
    ) -> Result<RemoteRepository<R>, RepositoryError> {
        RemoteRepository::new(self.client.clone(), &self.api_url, defaults)
    }
}

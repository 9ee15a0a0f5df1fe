//! Store - serialized, quota-aware access to collections on a [`Medium`].
//!
//! The store is the explicit object every repository is handed. It never
//! returns an error to its callers:
//!
//! - reads fall back to a caller-supplied default when an entry is absent or
//!   cannot be decoded;
//! - writes that exceed the quota run the eviction waterfall and, if that is
//!   exhausted, are logged and dropped.
//!
//! ## Example
//!
//! ```ignore
//! use shopvault::{InMemoryMedium, Store};
//!
//! let store = Store::new(InMemoryMedium::new());
//! store.set("mv_visitor_stats", &vec![1, 2, 3]);
//! let stats: Vec<u32> = store.get("mv_visitor_stats", Vec::new());
//! ```

mod eviction;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::config::StorageConfig;
use crate::id::IdGenerator;
use crate::medium::{FileMedium, InMemoryMedium, Medium, MediumError};
use crate::record::{decode_records, Record};

pub use eviction::EvictionPolicy;

use eviction::{evict_and_retry, Eviction};

/// What happened to a write.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum WriteOutcome {
    /// Stored on the first attempt.
    Stored,
    /// Stored after evicting these collections, in order.
    Recovered { evicted: Vec<String> },
    /// Not stored. Any collections listed were evicted on the way.
    Dropped { evicted: Vec<String> },
}

impl WriteOutcome {
    pub fn is_stored(&self) -> bool {
        !matches!(self, WriteOutcome::Dropped { .. })
    }

    /// Collections removed while handling this write.
    pub fn evicted(&self) -> &[String] {
        match self {
            WriteOutcome::Stored => &[],
            WriteOutcome::Recovered { evicted } | WriteOutcome::Dropped { evicted } => evicted,
        }
    }
}

/// Durable, quota-aware store of serialized collections.
pub struct Store {
    medium: Arc<dyn Medium>,
    policy: EvictionPolicy,
    writes: Mutex<()>,
    guards: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    ids: IdGenerator,
}

impl Store {
    /// Create a store over `medium` with the default eviction policy.
    pub fn new(medium: impl Medium + 'static) -> Self {
        Self::with_policy(medium, EvictionPolicy::default())
    }

    pub fn with_policy(medium: impl Medium + 'static, policy: EvictionPolicy) -> Self {
        Self::from_shared(Arc::new(medium), policy)
    }

    /// Create a store over a medium that is also held elsewhere.
    pub fn from_shared(medium: Arc<dyn Medium>, policy: EvictionPolicy) -> Self {
        Self {
            medium,
            policy,
            writes: Mutex::new(()),
            guards: Mutex::new(HashMap::new()),
            ids: IdGenerator::new(),
        }
    }

    /// Open the medium described by `config`: a directory when one is set,
    /// otherwise memory.
    pub fn init(config: &StorageConfig, policy: EvictionPolicy) -> Result<Self, MediumError> {
        let store = match &config.dir {
            Some(dir) => Self::with_policy(FileMedium::open(dir, config.capacity)?, policy),
            None => Self::with_policy(InMemoryMedium::with_capacity(config.capacity), policy),
        };
        debug!(
            dir = ?config.dir,
            capacity = config.capacity,
            usage = store.medium.usage(),
            "store initialized"
        );
        Ok(store)
    }

    pub fn medium(&self) -> &dyn Medium {
        self.medium.as_ref()
    }

    pub fn policy(&self) -> &EvictionPolicy {
        &self.policy
    }

    /// Decode the entry under `key`, or return `fallback` if it is absent or
    /// corrupt. Never writes.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(raw) = self.medium.get(key) else {
            return fallback;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                error!(key, error = %err, "storage read error, using fallback");
                fallback
            }
        }
    }

    /// Encode `value` and store it under `key`, evicting other collections
    /// if the quota is exceeded.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> WriteOutcome {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                error!(key, error = %err, "storage encode error, write dropped");
                return WriteOutcome::Dropped {
                    evicted: Vec::new(),
                };
            }
        };

        let _writing = self.writes.lock();
        match self.medium.set(key, payload.clone()) {
            Ok(()) => WriteOutcome::Stored,
            Err(err) if err.is_quota() => {
                match evict_and_retry(self.medium.as_ref(), &self.policy, key, &payload) {
                    Eviction::Recovered(evicted) => WriteOutcome::Recovered { evicted },
                    Eviction::Exhausted(evicted) => WriteOutcome::Dropped { evicted },
                }
            }
            Err(err) => {
                error!(key, error = %err, "storage write error, write dropped");
                WriteOutcome::Dropped {
                    evicted: Vec::new(),
                }
            }
        }
    }

    /// Typed read that always yields a value.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.read(key, default)
    }

    /// Fire-and-forget write.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let _ = self.write(key, value);
    }

    /// Load a record collection, dropping records that do not decode or do
    /// not validate. Absent or corrupt collections load as empty.
    pub fn read_collection<R: Record>(&self, key: &str) -> Vec<R> {
        let items: Vec<serde_json::Value> = self.read(key, Vec::new());
        decode_records(key, items)
    }

    /// Persist a whole record collection.
    pub fn write_collection<R: Record>(&self, key: &str, records: &[R]) -> WriteOutcome {
        self.write(key, records)
    }

    /// Remove an entry. Returns true if it existed.
    pub fn remove(&self, key: &str) -> bool {
        let _writing = self.writes.lock();
        match self.medium.remove(key) {
            Ok(existed) => existed,
            Err(err) => {
                error!(key, error = %err, "storage remove error");
                false
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.medium.contains(key)
    }

    /// Async guard serializing read-modify-write sequences on one collection.
    pub(crate) fn collection_guard(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        self.guards
            .lock()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Fresh stamp for record identifiers.
    pub(crate) fn next_stamp(&self) -> u64 {
        self.ids.next_stamp()
    }
}

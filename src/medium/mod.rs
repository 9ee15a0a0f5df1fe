//! Medium - the raw, synchronous key-value storage underneath the store.
//!
//! A medium stores strings under string keys and enforces a capacity
//! measured in UTF-16 code units of key plus value, the way an origin-scoped
//! browser storage counts its character quota. It knows nothing about
//! serialization or records; the [`Store`](crate::Store) layers those on top.

mod file;
mod in_memory;

use std::io;

use thiserror::Error;

pub use file::FileMedium;
pub use in_memory::InMemoryMedium;

/// Default capacity: 5 Mi UTF-16 code units.
pub const DEFAULT_CAPACITY: usize = 5 * 1024 * 1024;

/// Error type for medium operations.
#[derive(Debug, Error)]
pub enum MediumError {
    /// The write would push usage over capacity. The previous value is untouched.
    #[error("quota exceeded writing {key}: {required} units required, {available} available")]
    QuotaExceeded {
        key: String,
        required: usize,
        available: usize,
    },

    /// The backing file system failed.
    #[error("medium I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl MediumError {
    pub fn is_quota(&self) -> bool {
        matches!(self, MediumError::QuotaExceeded { .. })
    }
}

/// Synchronous, capacity-limited key-value storage.
pub trait Medium: Send + Sync {
    /// Get the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<(), MediumError>;

    /// Remove `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, MediumError>;

    /// All stored keys, in no particular order.
    fn keys(&self) -> Vec<String>;

    /// Units currently in use.
    fn usage(&self) -> usize;

    /// Total units available.
    fn capacity(&self) -> usize;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Size of an entry as the quota counts it.
pub fn entry_size(key: &str, value: &str) -> usize {
    key.encode_utf16().count() + value.encode_utf16().count()
}

/// Shared quota arithmetic: the usage after replacing `key` with `value`,
/// or the quota error if it does not fit.
pub(crate) fn check_quota(
    usage: usize,
    capacity: usize,
    previous: Option<usize>,
    key: &str,
    value: &str,
) -> Result<usize, MediumError> {
    let required = entry_size(key, value);
    let available = capacity.saturating_sub(usage - previous.unwrap_or(0));
    if required > available {
        return Err(MediumError::QuotaExceeded {
            key: key.to_string(),
            required,
            available,
        });
    }
    Ok(usage - previous.unwrap_or(0) + required)
}

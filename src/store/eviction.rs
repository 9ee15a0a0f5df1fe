//! Eviction waterfall run when a write exceeds the medium's quota.
//!
//! Candidates are removed whole, one at a time, in policy order; the failed
//! write is retried after each removal and the waterfall stops at the first
//! success. Transactional collections are never in the default policy.

use tracing::{error, info, warn};

use crate::keys;
use crate::medium::Medium;

/// Ordered list of collection keys, safest to delete first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvictionPolicy {
    priority: Vec<String>,
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self::new([
            keys::RECORDINGS,
            keys::ANALYTICS,
            keys::LOGS,
            keys::VISITOR_STATS,
            keys::NEGOTIATIONS,
        ])
    }
}

impl EvictionPolicy {
    pub fn new<I, S>(priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priority: priority.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy that never evicts anything.
    pub fn none() -> Self {
        Self {
            priority: Vec::new(),
        }
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    pub fn is_evictable(&self, key: &str) -> bool {
        self.priority.iter().any(|c| c == key)
    }
}

/// How a waterfall ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Eviction {
    /// The retry succeeded after removing these keys, in order.
    Recovered(Vec<String>),
    /// Every candidate was tried; these keys were removed and the write still failed.
    Exhausted(Vec<String>),
}

pub(crate) fn evict_and_retry(
    medium: &dyn Medium,
    policy: &EvictionPolicy,
    key: &str,
    payload: &str,
) -> Eviction {
    warn!(key, "storage quota exceeded, starting cleanup");

    let mut evicted = Vec::new();
    for candidate in policy.priority() {
        // The collection being written is never sacrificed for itself.
        if candidate == key {
            continue;
        }
        if !medium.get(candidate).is_some_and(|v| !v.is_empty()) {
            continue;
        }

        info!(key, candidate = %candidate, "evicting collection to recover space");
        if let Err(err) = medium.remove(candidate) {
            warn!(candidate = %candidate, error = %err, "eviction failed, moving to next target");
            continue;
        }
        evicted.push(candidate.clone());

        match medium.set(key, payload.to_string()) {
            Ok(()) => {
                info!(key, evicted = ?evicted, "storage recovered");
                return Eviction::Recovered(evicted);
            }
            Err(err) => {
                warn!(
                    key,
                    candidate = %candidate,
                    error = %err,
                    "eviction was not enough, moving to next target"
                );
            }
        }
    }

    error!(key, evicted = ?evicted, "CRITICAL: storage is full, write dropped");
    Eviction::Exhausted(evicted)
}

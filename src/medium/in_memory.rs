//! InMemoryMedium - HashMap-backed medium for tests and ephemeral processes.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{check_quota, entry_size, Medium, MediumError, DEFAULT_CAPACITY};

struct State {
    entries: HashMap<String, String>,
    usage: usize,
}

/// In-memory medium with an enforced capacity.
///
/// Clone-friendly via Arc: clones share the same entries.
#[derive(Clone)]
pub struct InMemoryMedium {
    state: Arc<RwLock<State>>,
    capacity: usize,
}

impl Default for InMemoryMedium {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMedium {
    /// Create an empty medium with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty medium holding at most `capacity` units.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                entries: HashMap::new(),
                usage: 0,
            })),
            capacity,
        }
    }
}

impl Medium for InMemoryMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.state.read().entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), MediumError> {
        let mut state = self.state.write();
        let previous = state.entries.get(key).map(|v| entry_size(key, v));
        state.usage = check_quota(state.usage, self.capacity, previous, key, &value)?;
        state.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, MediumError> {
        let mut state = self.state.write();
        match state.entries.remove(key) {
            Some(value) => {
                state.usage -= entry_size(key, &value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn keys(&self) -> Vec<String> {
        self.state.read().entries.keys().cloned().collect()
    }

    fn usage(&self) -> usize {
        self.state.read().usage
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

use std::{collections::HashMap, sync::RwLock};

use serde_json::Value;
use tracing::trace;

use crate::memory::{MemoryError, MemoryStore};

/// Process-local memory store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: RwLock<HashMap<String, Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemoryStore for InMemoryStore {
    fn recall(&self, key: &str) -> Result<Option<Value>, MemoryError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| MemoryError::Unavailable("store lock poisoned".into()))?;
        Ok(slots.get(key).cloned())
    }

    fn memorize(&self, key: &str, value: Value) -> Result<(), MemoryError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| MemoryError::Unavailable("store lock poisoned".into()))?;
        trace!(key, "memorize");
        slots.insert(key.to_string(), value);
        Ok(())
    }
}

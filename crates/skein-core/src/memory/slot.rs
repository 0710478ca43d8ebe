use std::{fmt, marker::PhantomData, sync::Arc};

use serde::{Serialize, de::DeserializeOwned};

use crate::memory::{MemoryError, MemoryStore};

/// Typed view of one key in a [`MemoryStore`].
pub struct MemorySlot<T> {
    store: Arc<dyn MemoryStore>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemorySlot<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn MemoryStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the current value, if any.
    pub fn recall(&self) -> Result<Option<T>, MemoryError> {
        match self.store.recall(&self.key)? {
            Some(raw) => serde_json::from_value(raw)
                .map(Some)
                .map_err(|e| self.codec_error(e)),
            None => Ok(None),
        }
    }

    /// Replace the stored value.
    pub fn memorize(&self, value: &T) -> Result<(), MemoryError> {
        let raw = serde_json::to_value(value).map_err(|e| self.codec_error(e))?;
        self.store.memorize(&self.key, raw)
    }

    fn codec_error(&self, e: serde_json::Error) -> MemoryError {
        MemoryError::Codec {
            key: self.key.clone(),
            reason: e.to_string(),
        }
    }
}

impl<T> Clone for MemorySlot<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for MemorySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySlot").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use skein_model::Understanding;

    #[test]
    fn typed_roundtrip_through_store() {
        let store: Arc<dyn MemoryStore> = Arc::new(InMemoryStore::new());
        let slot = MemorySlot::<Understanding>::new(store.clone(), "NLUSlot");

        assert_eq!(slot.recall().unwrap(), None);

        let u = Understanding::new("yes please", "confirm", "en");
        slot.memorize(&u).unwrap();
        assert_eq!(slot.recall().unwrap(), Some(u));
    }

    #[test]
    fn type_mismatch_is_a_codec_error() {
        let store: Arc<dyn MemoryStore> = Arc::new(InMemoryStore::new());
        MemorySlot::<String>::new(store.clone(), "newIndex")
            .memorize(&"7".to_string())
            .unwrap();

        let wrong = MemorySlot::<Understanding>::new(store, "newIndex");
        match wrong.recall() {
            Err(MemoryError::Codec { key, .. }) => assert_eq!(key, "newIndex"),
            other => panic!("expected codec error, got {other:?}"),
        }
    }
}

//! Shared key/value memory that outlives a single skill run.
//!
//! Stores are injected into skills through [`crate::BuildContext`]; skills only
//! ever hold typed [`MemorySlot`] handles. Values belong to the store.
mod slot;
pub use slot::MemorySlot;

mod store;
pub use store::InMemoryStore;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryError {
    /// The backing store could not be reached.
    #[error("memory unavailable: {0}")]
    Unavailable(String),

    /// Stored value does not match the slot type.
    #[error("memory slot '{key}' codec error: {reason}")]
    Codec { key: String, reason: String },
}

/// Key/value persistence boundary.
///
/// `memorize` replaces the value of a single key atomically.
pub trait MemoryStore: Send + Sync + 'static {
    fn recall(&self, key: &str) -> Result<Option<Value>, MemoryError>;

    fn memorize(&self, key: &str, value: Value) -> Result<(), MemoryError>;
}

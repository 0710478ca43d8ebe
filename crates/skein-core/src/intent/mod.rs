//! Sources of understood utterances for dialog skills.
mod hub;
pub use hub::{BroadcastIntentSource, IntentHub};

use skein_model::Understanding;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("speech recognition unavailable: {0}")]
    Unavailable(String),
}

/// Per-skill listener for understandings.
///
/// Only understandings that arrive between `start_listening` and `stop_listening`
/// are returned by `drain`.
pub trait IntentSource: Send {
    fn start_listening(&mut self) -> Result<(), IntentError>;

    /// Take everything understood since the last call, oldest first. Never blocks.
    fn drain(&mut self) -> Vec<Understanding>;

    fn stop_listening(&mut self);
}

/// Factory handing out a fresh [`IntentSource`] to every skill build.
pub trait IntentFeed: Send + Sync + 'static {
    fn open(&self) -> Box<dyn IntentSource>;
}

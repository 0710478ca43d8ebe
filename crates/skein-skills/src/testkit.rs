//! Test doubles shared by skill tests.
use std::sync::Mutex;

use serde_json::Value;

use skein_core::{Delivery, MemoryError, MemoryStore, Notifier, NotifyError};

/// Notifier that records successful utterances and can be told to fail once.
#[derive(Default)]
pub struct RecordingNotifier {
    said: Mutex<Vec<(String, Delivery)>>,
    fail_next: Mutex<Option<NotifyError>>,
}

impl RecordingNotifier {
    pub fn fail_next(&self, err: NotifyError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn said(&self) -> Vec<(String, Delivery)> {
        self.said.lock().unwrap().clone()
    }

    pub fn count(&self, text: &str) -> usize {
        self.said
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == text)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, text: &str, delivery: Delivery) -> Result<(), NotifyError> {
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        self.said.lock().unwrap().push((text.to_string(), delivery));
        Ok(())
    }
}

/// Memory store whose writes always fail.
#[derive(Default)]
pub struct UnreachableStore;

impl MemoryStore for UnreachableStore {
    fn recall(&self, _: &str) -> Result<Option<Value>, MemoryError> {
        Err(MemoryError::Unavailable("store offline".into()))
    }

    fn memorize(&self, _: &str, _: Value) -> Result<(), MemoryError> {
        Err(MemoryError::Unavailable("store offline".into()))
    }
}

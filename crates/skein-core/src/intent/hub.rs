use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use skein_model::Understanding;

use crate::intent::{IntentError, IntentFeed, IntentSource};

/// Fan-out point for understandings coming from the speech pipeline.
///
/// Every listening source receives every published understanding.
#[derive(Debug, Clone)]
pub struct IntentHub {
    tx: broadcast::Sender<Understanding>,
}

impl IntentHub {
    /// `capacity` bounds how far a slow listener may lag before it loses messages.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an understanding; returns how many listeners received it.
    pub fn publish(&self, understanding: Understanding) -> usize {
        self.tx.send(understanding).unwrap_or(0)
    }

    /// Number of sources currently listening.
    pub fn listeners(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for IntentHub {
    fn default() -> Self {
        Self::new(64)
    }
}

impl IntentFeed for IntentHub {
    fn open(&self) -> Box<dyn IntentSource> {
        Box::new(BroadcastIntentSource {
            tx: self.tx.clone(),
            rx: None,
        })
    }
}

/// [`IntentSource`] subscribed to an [`IntentHub`].
#[derive(Debug)]
pub struct BroadcastIntentSource {
    tx: broadcast::Sender<Understanding>,
    rx: Option<broadcast::Receiver<Understanding>>,
}

impl IntentSource for BroadcastIntentSource {
    fn start_listening(&mut self) -> Result<(), IntentError> {
        // fresh receiver: anything published earlier is not ours
        self.rx = Some(self.tx.subscribe());
        debug!("intent listener attached");
        Ok(())
    }

    fn drain(&mut self) -> Vec<Understanding> {
        let Some(rx) = self.rx.as_mut() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(u) => out.push(u),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "intent listener lagged; understandings dropped");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        out
    }

    fn stop_listening(&mut self) {
        if self.rx.take().is_some() {
            debug!("intent listener detached");
        }
    }
}

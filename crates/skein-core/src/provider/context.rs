use std::{fmt, sync::Arc};

use crate::{
    clock::{Clock, TokioClock},
    intent::IntentFeed,
    memory::{InMemoryStore, MemoryStore},
    metrics::{MetricsHandle, noop_metrics},
    notify::{Notifier, TracingNotifier},
    provider::ProviderError,
};

/// Shared collaborators handed to every provider at build time.
#[derive(Clone)]
pub struct BuildContext {
    notifier: Arc<dyn Notifier>,
    memory: Arc<dyn MemoryStore>,
    clock: Arc<dyn Clock>,
    metrics: MetricsHandle,
    intents: Option<Arc<dyn IntentFeed>>,
}

impl BuildContext {
    pub fn new(
        notifier: Arc<dyn Notifier>,
        memory: Arc<dyn MemoryStore>,
        clock: Arc<dyn Clock>,
        metrics: MetricsHandle,
    ) -> Self {
        Self {
            notifier,
            memory,
            clock,
            metrics,
            intents: None,
        }
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn memory(&self) -> &Arc<dyn MemoryStore> {
        &self.memory
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    /// Intent feed, or an error naming the missing collaborator.
    pub fn intents(&self) -> Result<&Arc<dyn IntentFeed>, ProviderError> {
        self.intents
            .as_ref()
            .ok_or(ProviderError::MissingCollaborator("intent feed"))
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_memory(mut self, memory: Arc<dyn MemoryStore>) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_intents(mut self, intents: Arc<dyn IntentFeed>) -> Self {
        self.intents = Some(intents);
        self
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(
            Arc::new(TracingNotifier),
            Arc::new(InMemoryStore::new()),
            Arc::new(TokioClock),
            noop_metrics(),
        )
    }
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("notifier", &"<dyn Notifier>")
            .field("memory", &"<dyn MemoryStore>")
            .field("clock", &"<dyn Clock>")
            .field("metrics", &"<handle>")
            .field("intents", &self.intents.is_some())
            .finish()
    }
}

impl fmt::Display for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuildContext(intents={})", self.intents.is_some())
    }
}

pub mod clock;
pub mod countdown;
pub mod driver;
pub mod error;
pub mod intent;
pub mod map;
pub mod memory;
pub mod metrics;
pub mod notify;
pub mod provider;
pub mod registry;
pub mod skill;
pub mod supervisor;
pub mod task;

pub use clock::{Clock, ManualClock, TokioClock};
pub use countdown::Countdown;
pub use driver::{RunError, RunSummary, run_skill};
pub use error::CoreError;
pub use intent::{BroadcastIntentSource, IntentError, IntentFeed, IntentHub, IntentSource};
pub use memory::{InMemoryStore, MemoryError, MemorySlot, MemoryStore};
pub use metrics::{MetricsBackend, MetricsHandle, NoOpMetrics, SkillOutcome, noop_metrics};
pub use notify::{Delivery, Notifier, NotifyError, SilentNotifier, Speaker, TracingNotifier};
pub use provider::{BuildContext, ProviderError, SkillProvider, make_run_id};
pub use registry::{ProviderEntry, SkillRegistry};
pub use skill::{Skill, SkillError};
pub use supervisor::SupervisorApi;
pub use task::{SkillReports, skill_task};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::provider::{BuildContext, ProviderError, SkillProvider};
    pub use crate::registry::SkillRegistry;
    pub use crate::skill::{Skill, SkillError};
    pub use crate::supervisor::SupervisorApi;
}

mod domain;
pub use domain::LABEL_PROVIDER_TAG;
pub use domain::{LanguageTag, Labels, Options, Slot, TimeoutMs, Understanding};

mod error;
pub use error::{ModelError, ModelResult};

mod exit;
pub use exit::{ExitStatus, ExitToken, FailureKind, Step};

mod spec;
pub use spec::SkillSpec;

mod strategy;
pub use strategy::AdmissionStrategy;

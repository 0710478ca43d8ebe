//! Mapping of model-level strategies onto taskvisor policies.
mod admission;
mod spec;

pub use admission::to_admission_policy;
pub use spec::{to_controller_spec, to_task_spec};

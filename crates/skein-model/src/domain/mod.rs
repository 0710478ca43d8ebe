mod options;
pub use options::Options;

mod labels;
pub use labels::Labels;

mod understanding;
pub use understanding::{LanguageTag, Understanding};

mod constants;
pub use constants::LABEL_PROVIDER_TAG;

/// Logical identifier for a controller slot.
///
/// Skills submitted into the same slot never run concurrently; admission decides what happens on conflict.
pub type Slot = String;

/// Timeout value in milliseconds.
pub type TimeoutMs = u64;

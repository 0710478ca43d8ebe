use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Defines how the controller admits a new skill run into a busy slot.
///
/// A slot runs one skill at a time; a robot cannot learn a face and listen for an answer with the same lane.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum AdmissionStrategy {
    /// Ignore the new run while the slot is busy.
    #[default]
    DropIfRunning,
    /// Cancel the running skill (no finalize) and start the new one.
    Replace,
    /// Run the new skill once the slot is free.
    Queue,
}

impl FromStr for AdmissionStrategy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop-if-running" | "drop" => Ok(AdmissionStrategy::DropIfRunning),
            "queue" => Ok(AdmissionStrategy::Queue),
            "replace" => Ok(AdmissionStrategy::Replace),
            other => Err(ModelError::UnknownAdmission(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!(
            "drop".parse::<AdmissionStrategy>().unwrap(),
            AdmissionStrategy::DropIfRunning
        );
        assert_eq!(
            " Replace ".parse::<AdmissionStrategy>().unwrap(),
            AdmissionStrategy::Replace
        );
        assert_eq!(
            "queue".parse::<AdmissionStrategy>().unwrap(),
            AdmissionStrategy::Queue
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            "later".parse::<AdmissionStrategy>(),
            Err(ModelError::UnknownAdmission(_))
        ));
    }
}

use thiserror::Error;

use skein_model::ModelError;

use crate::skill::SkillError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unsupported skill for provider '{provider}': {skill}")]
    UnsupportedSkill {
        provider: &'static str,
        skill: String,
    },

    #[error("invalid specification: {0}")]
    InvalidSpec(String),

    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ModelError> for ProviderError {
    fn from(e: ModelError) -> Self {
        ProviderError::InvalidSpec(e.to_string())
    }
}

impl From<SkillError> for ProviderError {
    fn from(e: SkillError) -> Self {
        match e {
            SkillError::Config(m) => ProviderError::InvalidSpec(m.to_string()),
            other => ProviderError::Internal(other.to_string()),
        }
    }
}

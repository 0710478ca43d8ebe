use thiserror::Error;

use skein_model::ModelError;

#[derive(Debug, Error)]
pub enum SkillError {
    /// Unrecoverable defect (interrupted or failed blocking collaborator call).
    #[error("skill '{skill}' hit a defect: {reason}")]
    Defect { skill: &'static str, reason: String },

    #[error("invalid skill configuration: {0}")]
    Config(#[from] ModelError),
}

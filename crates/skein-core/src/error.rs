use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no suitable provider for skill: {0}")]
    NoProvider(String),

    #[error("supervisor error: {0}")]
    Supervisor(String),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}

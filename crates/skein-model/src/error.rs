use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown admission strategy: {0}")]
    UnknownAdmission(String),

    #[error("unknown exit status: {0}")]
    UnknownStatus(String),

    #[error("missing required option: {0}")]
    MissingOption(String),

    #[error("invalid value for option '{key}': {value}")]
    InvalidOption { key: String, value: String },

    #[error("conflicting options: {0}")]
    ConflictingOptions(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;

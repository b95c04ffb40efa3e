use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid user json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("user record is missing a login name")]
    MissingLoginName,
}

pub type Result<T> = std::result::Result<T, ModelError>;

//! Application Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser storage unavailable")]
    StorageUnavailable,

    #[error("unknown tutorial section '{0}'")]
    UnknownSection(String),

    #[error("unknown product card part '{0}'")]
    UnknownPart(String),
}

pub type AppResult<T> = Result<T, AppError>;

use thiserror::Error;

use crate::rates::RateError;

/// Custom error type for currency catalog operations
#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("iso_4217 must contain exactly 3 alphabetic characters, got '{0}'")]
    InvalidCode(String),

    #[error("Currency '{0}' is not recognized by the external Currency API")]
    UnknownCode(String),

    #[error("Currency '{0}' already exist")]
    AlreadyExists(String),

    #[error("Currency '{0}' does not exist")]
    NotFound(String),

    #[error("Cannot find any currency on database")]
    NoCurrencyFound,

    #[error(transparent)]
    RateSource(#[from] RateError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Result type for currency operations
pub type Result<T> = std::result::Result<T, CurrencyError>;

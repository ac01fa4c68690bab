use thiserror::Error;

/// Custom error type for the external rate source
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Cannot reach external Currency API: {0}")]
    Unavailable(String),

    #[error("Rate source returned no rate for '{0}'")]
    MissingRate(String),
}

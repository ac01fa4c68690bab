use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use cambio_core::currencies::CurrencyError;
use cambio_core::rates::RateError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CurrencyError),
}

#[derive(Serialize)]
struct ErrorBody {
    error_code: String,
    error_message: String,
}

impl ApiError {
    /// Every domain failure maps to exactly one fixed (status, error_code)
    /// pair; the codes are part of the wire contract.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        let ApiError::Core(e) = self;
        match e {
            CurrencyError::InvalidCode(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity")
            }
            CurrencyError::UnknownCode(_) | CurrencyError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "currency_does_not_exists_error")
            }
            CurrencyError::AlreadyExists(_) => {
                (StatusCode::CONFLICT, "currency_already_exists_error")
            }
            CurrencyError::NoCurrencyFound => (StatusCode::NOT_FOUND, "no_currency_found_error"),
            CurrencyError::RateSource(RateError::Unavailable(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable_external_api_error",
            ),
            CurrencyError::RateSource(RateError::MissingRate(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "incomplete_rate_data_error",
            ),
            CurrencyError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_server_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(%status, error_code, "request failed: {}", self);
        }
        let body = Json(ErrorBody {
            error_code: error_code.to_string(),
            error_message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

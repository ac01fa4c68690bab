#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use rust_decimal::Decimal;
use serde_json::Value;

use cambio_core::currencies::{CurrencyRepository, CurrencyService};
use cambio_core::db;
use cambio_core::rates::{RateError, RateProviderTrait};
use cambio_server::api::app_router;
use cambio_server::config::Config;
use cambio_server::AppState;

/// Scriptable stand-in for the external rate API.
#[derive(Default)]
pub struct StubRateProvider {
    pub exists: bool,
    pub rates: HashMap<String, Decimal>,
    pub unavailable: bool,
}

impl StubRateProvider {
    pub fn recognizing() -> Self {
        Self {
            exists: true,
            ..Default::default()
        }
    }

    pub fn with_rates(rates: &[(&str, Decimal)]) -> Self {
        Self {
            exists: true,
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl RateProviderTrait for StubRateProvider {
    async fn currency_exists(&self, _iso_4217: &str) -> Result<bool, RateError> {
        if self.unavailable {
            return Err(RateError::Unavailable("connection refused".to_string()));
        }
        Ok(self.exists)
    }

    async fn get_latest_rates(
        &self,
        _iso_4217_codes: &[String],
        _amount: Option<Decimal>,
        _base: Option<&str>,
    ) -> Result<HashMap<String, Decimal>, RateError> {
        if self.unavailable {
            return Err(RateError::Unavailable("connection refused".to_string()));
        }
        Ok(self.rates.clone())
    }
}

/// Builds the full application over a throwaway database and the given
/// provider stub. The TempDir must outlive the returned router.
pub fn test_app(provider: StubRateProvider) -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let db_path = db_path.to_str().unwrap();

    db::init(db_path).unwrap();
    let pool = db::create_pool(db_path).unwrap();
    db::run_migrations(&pool).unwrap();

    let repository = Arc::new(CurrencyRepository::new(pool));
    let currency_service = Arc::new(CurrencyService::new(repository, Arc::new(provider)));
    let state = Arc::new(AppState { currency_service });

    let config = Config::from_env();
    (dir, app_router(state, &config))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn request_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

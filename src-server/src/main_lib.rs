use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use cambio_core::currencies::{CurrencyRepository, CurrencyService, CurrencyServiceTrait};
use cambio_core::db;
use cambio_core::rates::ExchangeRateApiProvider;

use crate::config::Config;

pub struct AppState {
    pub currency_service: Arc<dyn CurrencyServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let repository = Arc::new(CurrencyRepository::new(pool));

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let rate_provider = Arc::new(ExchangeRateApiProvider::new(
        config.rates_api_url.clone(),
        http_client,
    ));

    let currency_service = Arc::new(CurrencyService::new(repository, rate_provider));

    Ok(Arc::new(AppState { currency_service }))
}

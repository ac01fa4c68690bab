pub mod currencies;
pub mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, main_lib::AppState, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        currencies::list_currencies,
        currencies::create_currency,
        currencies::update_currency,
        currencies::delete_currency,
        currencies::currencies_price,
    ),
    components(schemas(
        models::Currency,
        models::NewCurrency,
        models::CurrencyUpdate,
        models::CurrenciesPriceInput,
        models::CurrencyQuote,
    ))
)]
struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .merge(health::router())
        .merge(currencies::router())
        .merge(SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors)
        .with_state(state)
}

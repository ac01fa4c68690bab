use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CurrenciesPriceInput, Currency, CurrencyQuote, CurrencyUpdate, NewCurrency},
};

#[utoipa::path(get, path = "/api/currency/", responses((status = 200, body = [Currency])))]
pub(crate) async fn list_currencies(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Currency>>> {
    let currencies = state.currency_service.get_currencies()?;
    Ok(Json(currencies.into_iter().map(Currency::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/currency/",
    request_body = NewCurrency,
    responses((status = 201, body = Currency))
)]
pub(crate) async fn create_currency(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCurrency>,
) -> ApiResult<(StatusCode, Json<Currency>)> {
    let created = state.currency_service.create_currency(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    patch,
    path = "/api/currency/{id}",
    request_body = CurrencyUpdate,
    responses((status = 204))
)]
pub(crate) async fn update_currency(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CurrencyUpdate>,
) -> ApiResult<StatusCode> {
    state
        .currency_service
        .update_currency(&id, payload.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete, path = "/api/currency/{id}", responses((status = 204)))]
pub(crate) async fn delete_currency(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.currency_service.delete_currency(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/currency/currencies-price",
    request_body = CurrenciesPriceInput,
    responses((status = 200, body = [CurrencyQuote]))
)]
pub(crate) async fn currencies_price(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CurrenciesPriceInput>,
) -> ApiResult<Json<Vec<CurrencyQuote>>> {
    let quotes = state
        .currency_service
        .get_currencies_price(&payload.base_currency, payload.amount)
        .await?;
    Ok(Json(quotes.into_iter().map(CurrencyQuote::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/currency/",
            get(list_currencies).post(create_currency),
        )
        .route(
            "/api/currency/{id}",
            patch(update_currency).delete(delete_currency),
        )
        .route("/api/currency/currencies-price", post(currencies_price))
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cambio_core::currencies;

/// A catalog currency as exposed over the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub iso_4217: String,
}

impl From<currencies::Currency> for Currency {
    fn from(currency: currencies::Currency) -> Self {
        Self {
            id: currency.id,
            name: currency.name,
            iso_4217: currency.iso_4217,
        }
    }
}

/// Request body for creating a currency
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewCurrency {
    pub name: String,
    pub iso_4217: String,
}

impl From<NewCurrency> for currencies::NewCurrency {
    fn from(payload: NewCurrency) -> Self {
        Self {
            name: payload.name,
            iso_4217: payload.iso_4217,
        }
    }
}

/// Request body for partially updating a currency; absent fields are left
/// unchanged
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrencyUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub iso_4217: Option<String>,
}

impl From<CurrencyUpdate> for currencies::CurrencyUpdate {
    fn from(payload: CurrencyUpdate) -> Self {
        Self {
            name: payload.name,
            iso_4217: payload.iso_4217,
        }
    }
}

/// Request body for the currencies-price endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrenciesPriceInput {
    pub base_currency: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Decimal>,
}

/// Price of one stored currency against the requested base
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrencyQuote {
    pub name: String,
    pub iso_4217: String,
    #[schema(value_type = f64)]
    pub amount: Decimal,
}

impl From<currencies::CurrencyQuote> for CurrencyQuote {
    fn from(quote: currencies::CurrencyQuote) -> Self {
        Self {
            name: quote.name,
            iso_4217: quote.iso_4217,
            amount: quote.amount,
        }
    }
}

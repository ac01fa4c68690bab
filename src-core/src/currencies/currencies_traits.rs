use async_trait::async_trait;
use rust_decimal::Decimal;

use super::currencies_errors::Result;
use super::currencies_model::{
    Currency, CurrencyChangeset, CurrencyQuote, CurrencyUpdate, NewCurrency,
};

/// Trait defining the contract for the currency store.
///
/// The store is deliberately dumb: existence and uniqueness rules live in the
/// service so persistence stays swappable and testable on its own.
pub trait CurrencyRepositoryTrait: Send + Sync {
    fn get_by_code(&self, iso_4217: &str) -> Result<Option<Currency>>;
    fn get_by_id(&self, currency_id: &str) -> Result<Option<Currency>>;
    fn list(&self) -> Result<Vec<Currency>>;
    fn create(&self, name: &str, iso_4217: &str) -> Result<Currency>;
    fn update(&self, currency_id: &str, changeset: CurrencyChangeset) -> Result<()>;
    fn delete(&self, currency_id: &str) -> Result<()>;
}

/// Trait defining the contract for currency service operations.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    fn get_currencies(&self) -> Result<Vec<Currency>>;
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
    async fn update_currency(&self, currency_id: &str, update: CurrencyUpdate) -> Result<()>;
    async fn delete_currency(&self, currency_id: &str) -> Result<()>;
    async fn get_currencies_price(
        &self,
        base_currency: &str,
        amount: Option<Decimal>,
    ) -> Result<Vec<CurrencyQuote>>;
}

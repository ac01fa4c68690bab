use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::rates_errors::RateError;

/// Trait defining the contract for the external rate source.
#[async_trait]
pub trait RateProviderTrait: Send + Sync {
    /// Returns whether the rate source recognizes the given ISO 4217 code.
    ///
    /// A transport failure is never reported as "does not exist".
    async fn currency_exists(&self, iso_4217: &str) -> Result<bool, RateError>;

    /// Fetches the latest rates for the given codes, optionally quoting
    /// `amount` units of the `base` currency.
    async fn get_latest_rates(
        &self,
        iso_4217_codes: &[String],
        amount: Option<Decimal>,
        base: Option<&str>,
    ) -> Result<HashMap<String, Decimal>, RateError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::rates::{RateError, RateProviderTrait};

use super::currencies_errors::{CurrencyError, Result};
use super::currencies_model::{
    normalize_code, Currency, CurrencyChangeset, CurrencyQuote, CurrencyUpdate, NewCurrency,
};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};

/// Service orchestrating the currency store and the external rate source.
/// All business rules live here; store and provider are narrow collaborators.
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
    rate_provider: Arc<dyn RateProviderTrait>,
}

impl CurrencyService {
    pub fn new(
        repository: Arc<dyn CurrencyRepositoryTrait>,
        rate_provider: Arc<dyn RateProviderTrait>,
    ) -> Self {
        Self {
            repository,
            rate_provider,
        }
    }

    /// Rejects codes the rate source does not recognize. Provider failures
    /// propagate as-is and are never downgraded to "does not exist".
    async fn check_code_recognized(&self, iso_4217: &str) -> Result<()> {
        let exists = self.rate_provider.currency_exists(iso_4217).await?;
        if !exists {
            return Err(CurrencyError::UnknownCode(iso_4217.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    fn get_currencies(&self) -> Result<Vec<Currency>> {
        self.repository.list()
    }

    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        let iso_4217 = normalize_code(&new_currency.iso_4217)?;

        // Upstream recognition comes before the local duplicate check so an
        // unknown code is rejected as not-found even when a same-code row
        // already exists.
        self.check_code_recognized(&iso_4217).await?;

        if self.repository.get_by_code(&iso_4217)?.is_some() {
            return Err(CurrencyError::AlreadyExists(iso_4217));
        }

        debug!("Creating currency {}", iso_4217);
        self.repository.create(&new_currency.name, &iso_4217)
    }

    async fn update_currency(&self, currency_id: &str, update: CurrencyUpdate) -> Result<()> {
        if self.repository.get_by_id(currency_id)?.is_none() {
            return Err(CurrencyError::NotFound(currency_id.to_string()));
        }

        let mut changeset = CurrencyChangeset::default();

        if let Some(code) = update.iso_4217.as_deref() {
            let iso_4217 = normalize_code(code)?;
            self.check_code_recognized(&iso_4217).await?;

            // The duplicate check does not exclude the record being updated:
            // resubmitting a currency's own code conflicts with itself.
            if self.repository.get_by_code(&iso_4217)?.is_some() {
                return Err(CurrencyError::AlreadyExists(iso_4217));
            }

            changeset.iso_4217 = Some(iso_4217);
        }

        if let Some(name) = update.name {
            changeset.name = Some(name);
        }

        if changeset.is_empty() {
            return Ok(());
        }

        debug!("Updating currency {}", currency_id);
        self.repository.update(currency_id, changeset)
    }

    async fn delete_currency(&self, currency_id: &str) -> Result<()> {
        if self.repository.get_by_id(currency_id)?.is_none() {
            return Err(CurrencyError::NotFound(currency_id.to_string()));
        }

        debug!("Deleting currency {}", currency_id);
        self.repository.delete(currency_id)
    }

    async fn get_currencies_price(
        &self,
        base_currency: &str,
        amount: Option<Decimal>,
    ) -> Result<Vec<CurrencyQuote>> {
        let base = normalize_code(base_currency)?;
        self.check_code_recognized(&base).await?;

        let currencies = self.repository.list()?;
        if currencies.is_empty() {
            return Err(CurrencyError::NoCurrencyFound);
        }

        let codes: Vec<String> = currencies.iter().map(|c| c.iso_4217.clone()).collect();
        let rates = self
            .rate_provider
            .get_latest_rates(&codes, amount, Some(&base))
            .await?;

        // Store iteration order is preserved. A stored code the provider did
        // not quote is a contract violation and fails the whole request.
        currencies
            .into_iter()
            .map(|currency| {
                let amount = rates
                    .get(&currency.iso_4217)
                    .copied()
                    .ok_or_else(|| RateError::MissingRate(currency.iso_4217.clone()))?;

                Ok(CurrencyQuote {
                    name: currency.name,
                    iso_4217: currency.iso_4217,
                    amount,
                })
            })
            .collect()
    }
}

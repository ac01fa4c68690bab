use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::rates_errors::RateError;
use super::rates_model::RatesResponse;
use super::rates_traits::RateProviderTrait;

/// Rate provider backed by an exchangerate.host compatible API.
pub struct ExchangeRateApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    /// Timeouts are the caller's concern and belong on the `reqwest::Client`
    /// handed in here.
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Query parameter order (symbols, places, amount, base) is a
    /// compatibility contract with the rate API and must not change.
    fn build_latest_url(
        &self,
        iso_4217_codes: &[String],
        amount: Option<Decimal>,
        base: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}/latest?symbols={}&places=2",
            self.base_url,
            iso_4217_codes.join(",")
        );
        if let Some(amount) = amount {
            url.push_str(&format!("&amount={:.2}", amount));
        }
        if let Some(base) = base {
            url.push_str(&format!("&base={}", base));
        }
        url
    }

    async fn fetch_rates(&self, url: &str) -> Result<HashMap<String, Decimal>, RateError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RateError::Unavailable(e.to_string()))?
            .json::<RatesResponse>()
            .await
            .map_err(|e| RateError::Unavailable(e.to_string()))?;

        Ok(response.rates)
    }
}

#[async_trait]
impl RateProviderTrait for ExchangeRateApiProvider {
    async fn currency_exists(&self, iso_4217: &str) -> Result<bool, RateError> {
        let url = format!("{}/latest?symbols={}", self.base_url, iso_4217);
        let rates = self.fetch_rates(&url).await?;
        Ok(rates.len() == 1)
    }

    async fn get_latest_rates(
        &self,
        iso_4217_codes: &[String],
        amount: Option<Decimal>,
        base: Option<&str>,
    ) -> Result<HashMap<String, Decimal>, RateError> {
        let url = self.build_latest_url(iso_4217_codes, amount, base);
        self.fetch_rates(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn provider(base_url: &str) -> ExchangeRateApiProvider {
        ExchangeRateApiProvider::new(base_url, reqwest::Client::new())
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builds_url_with_symbols_and_places_only() {
        let url = provider("https://api.example.com").build_latest_url(
            &codes(&["BRL", "USD"]),
            None,
            None,
        );
        assert_eq!(url, "https://api.example.com/latest?symbols=BRL,USD&places=2");
    }

    #[test]
    fn builds_url_with_amount_and_base_in_fixed_order() {
        let url = provider("https://api.example.com").build_latest_url(
            &codes(&["BRL", "USD", "EUR"]),
            Some(dec!(50)),
            Some("BRL"),
        );
        assert_eq!(
            url,
            "https://api.example.com/latest?symbols=BRL,USD,EUR&places=2&amount=50.00&base=BRL"
        );
    }

    #[test]
    fn formats_amount_with_two_decimal_places() {
        let url = provider("https://api.example.com").build_latest_url(
            &codes(&["USD"]),
            Some(dec!(0.1)),
            None,
        );
        assert_eq!(
            url,
            "https://api.example.com/latest?symbols=USD&places=2&amount=0.10"
        );
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let url = provider("https://api.example.com/").build_latest_url(&codes(&["USD"]), None, None);
        assert_eq!(url, "https://api.example.com/latest?symbols=USD&places=2");
    }
}

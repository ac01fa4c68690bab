// Module declarations
pub(crate) mod rates_errors;
pub(crate) mod rates_model;
pub(crate) mod rates_provider;
pub(crate) mod rates_traits;

// Re-export the public interface
pub use rates_errors::RateError;
pub use rates_model::RatesResponse;
pub use rates_provider::ExchangeRateApiProvider;
pub use rates_traits::RateProviderTrait;

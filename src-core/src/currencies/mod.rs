// Module declarations
pub(crate) mod currencies_errors;
pub(crate) mod currencies_model;
pub(crate) mod currencies_repository;
pub(crate) mod currencies_service;
pub(crate) mod currencies_traits;

// Re-export the public interface
pub use currencies_errors::{CurrencyError, Result};
pub use currencies_model::{
    normalize_code, Currency, CurrencyChangeset, CurrencyDB, CurrencyQuote, CurrencyUpdate,
    NewCurrency,
};
pub use currencies_repository::CurrencyRepository;
pub use currencies_service::CurrencyService;
pub use currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};

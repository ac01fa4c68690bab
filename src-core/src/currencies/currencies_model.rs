use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies_errors::{CurrencyError, Result};

/// Domain model representing a catalog currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub iso_4217: String,
}

/// Input model for creating a new currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCurrency {
    pub name: String,
    pub iso_4217: String,
}

/// Input model for partially updating a currency; `None` means "not supplied"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyUpdate {
    pub name: Option<String>,
    pub iso_4217: Option<String>,
}

/// Price quote entry computed per request, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyQuote {
    pub name: String,
    pub iso_4217: String,
    pub amount: Decimal,
}

/// Validates an ISO 4217 code and returns it uppercased.
pub fn normalize_code(iso_4217: &str) -> Result<String> {
    let well_formed =
        iso_4217.chars().count() == 3 && iso_4217.chars().all(|c| c.is_alphabetic());

    if !well_formed {
        return Err(CurrencyError::InvalidCode(iso_4217.to_string()));
    }

    Ok(iso_4217.to_uppercase())
}

/// Database model for currencies
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::currencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyDB {
    pub id: String,
    pub name: String,
    pub iso_4217: String,
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            iso_4217: db.iso_4217,
        }
    }
}

impl From<Currency> for CurrencyDB {
    fn from(currency: Currency) -> Self {
        Self {
            id: currency.id,
            name: currency.name,
            iso_4217: currency.iso_4217,
        }
    }
}

/// Write-side delta for partial updates; `None` fields are not written.
/// The service computes the delta, the repository applies it verbatim.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq)]
#[diesel(table_name = crate::schema::currencies)]
pub struct CurrencyChangeset {
    pub name: Option<String>,
    pub iso_4217: Option<String>,
}

impl CurrencyChangeset {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.iso_4217.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_uppercases_valid_codes() {
        assert_eq!(normalize_code("usd").unwrap(), "USD");
        assert_eq!(normalize_code("Brl").unwrap(), "BRL");
        assert_eq!(normalize_code("EUR").unwrap(), "EUR");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_code("gbp").unwrap();
        assert_eq!(normalize_code(&once).unwrap(), once);
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["", "BR", "BRLL", "123", "U2D", "US "] {
            let err = normalize_code(code).unwrap_err();
            assert!(
                matches!(err, CurrencyError::InvalidCode(_)),
                "expected InvalidCode for {:?}",
                code
            );
        }
    }
}

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Body of the rate source `/latest` endpoint, reduced to the field we consume.
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

pub mod db;
pub mod errors;
pub mod schema;

pub mod currencies;
pub mod rates;

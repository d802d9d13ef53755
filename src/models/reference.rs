use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// https://docs.saltedge.com/account_information/v5/#currencies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

// https://docs.saltedge.com/account_information/v5/#assets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub code: String,
    pub name: String,
}

/// Exchange rate against USD
// https://docs.saltedge.com/account_information/v5/#rates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rate {
    pub currency_code: String,
    pub rate: Decimal,
    /// Set when the rate could not be fetched for the requested date
    #[serde(default)]
    pub fail: bool,
}

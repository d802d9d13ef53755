use serde::{Deserialize, Serialize};
use serde_json::Value;

// https://docs.saltedge.com/account_information/v5/#merchants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Merchant {
    pub id: String,
    #[serde(default)]
    pub names: Vec<MerchantAttribute>,
    #[serde(default)]
    pub contact: Vec<MerchantAttribute>,
    #[serde(default)]
    pub address: Option<Value>,
}

impl Merchant {
    /// First name entry, which the API lists as the preferred one
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(|n| n.value.as_str())
    }
}

/// A `mode`/`value` pair, e.g. `{"mode": "website", "value": "www.example.com"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MerchantAttribute {
    pub mode: String,
    pub value: String,
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// https://docs.saltedge.com/account_information/v5/#accounts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub connection_id: String,
    pub name: String,
    /// e.g. `account`, `card`, `credit_card`, `savings`
    pub nature: String,
    pub balance: Decimal,
    pub currency_code: String,
    #[serde(default)]
    pub extra: AccountExtra,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions_count: Option<TransactionCount>,
    /// Provider specific fields not modelled above
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionCount {
    pub posted: u32,
    pub pending: u32,
}

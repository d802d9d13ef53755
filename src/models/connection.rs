use super::attempt::Attempt;
use super::country::CountryCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// https://docs.saltedge.com/account_information/v5/#connections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub id: String,
    pub customer_id: String,
    pub provider_id: String,
    pub provider_code: String,
    pub provider_name: String,
    pub country_code: CountryCode,
    pub status: ConnectionStatus,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub categorization: Option<String>,
    #[serde(default)]
    pub daily_refresh: bool,
    #[serde(default)]
    pub store_credentials: bool,
    #[serde(default)]
    pub show_consent_confirmation: bool,
    #[serde(default)]
    pub last_consent_id: Option<String>,
    #[serde(default)]
    pub last_attempt: Option<Attempt>,
    #[serde(default)]
    pub last_success_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_refresh_possible_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Active,
    Inactive,
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemovedConnection {
    pub removed: bool,
    pub id: String,
}

/// Essential information about an account holder
// https://docs.saltedge.com/account_information/v5/#holder_info
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HolderInfo {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<HolderAddress>,
    #[serde(default)]
    pub extra: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HolderAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub post_code: Option<String>,
}

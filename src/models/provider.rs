use super::country::CountryCode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// https://docs.saltedge.com/account_information/v5/#providers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: String,
    pub code: String,
    pub name: String,
    pub mode: ProviderMode,
    pub status: String,
    pub country_code: CountryCode,
    #[serde(default)]
    pub automatic_fetch: bool,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub regulated: bool,
    #[serde(default)]
    pub identification_mode: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub home_url: Option<String>,
    #[serde(default)]
    pub login_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub max_consent_days: Option<u32>,
    #[serde(default)]
    pub max_fetch_interval: Option<u32>,
    #[serde(default)]
    pub holder_info: Vec<String>,
    #[serde(default)]
    pub supported_fetch_scopes: Vec<String>,
    #[serde(default)]
    pub supported_account_natures: Vec<String>,
    /// Only present when requested with `include_provider_fields`
    #[serde(default)]
    pub required_fields: Vec<ProviderField>,
    #[serde(default)]
    pub interactive_fields: Vec<ProviderField>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderField {
    pub name: String,
    pub english_name: String,
    pub localized_name: String,
    pub nature: String,
    pub optional: bool,
    pub position: i32,
    #[serde(default)]
    pub field_options: Option<Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    Oauth,
    Web,
    Api,
    File,
}

impl ProviderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderMode::Oauth => "oauth",
            ProviderMode::Web => "web",
            ProviderMode::Api => "api",
            ProviderMode::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKeyOwner {
    Client,
    Saltedge,
}

impl ProviderKeyOwner {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKeyOwner::Client => "client",
            ProviderKeyOwner::Saltedge => "saltedge",
        }
    }
}

/// Filters for the providers listing; everything left unset is not sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvidersQuery {
    pub from_id: Option<String>,
    /// Providers created or updated on or after this date
    pub from_date: Option<NaiveDate>,
    pub country_code: Option<CountryCode>,
    pub mode: Option<ProviderMode>,
    pub include_fake_providers: bool,
    pub include_provider_fields: bool,
    pub provider_key_owner: Option<ProviderKeyOwner>,
}

//! Connect session requests.
//!
//! These describe how Salt Edge Connect should start an interactive
//! create/reconnect/refresh flow. Unset optional fields are left out of the
//! request body so the API applies its own defaults.

use super::country::CountryCode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// https://docs.saltedge.com/account_information/v5/#consents-object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsentRequest {
    /// e.g. `account_details`, `transactions_details`
    pub scopes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_days: Option<u32>,
}

// https://docs.saltedge.com/account_information/v5/#attempts-attempt_object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttemptRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fetch_scopes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_credentials: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateSession {
    pub customer_id: String,
    pub consent: ConsentRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_countries: Vec<CountryCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_provider_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript_callback_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReconnectSession {
    pub connection_id: String,
    pub consent: ConsentRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_consent_confirmation: Option<bool>,
    /// `ask`, `store` or `keep`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_credentials_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript_callback_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RefreshSession {
    pub connection_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_fake_providers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript_callback_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub expires_at: DateTime<Utc>,
    pub connect_url: String,
}

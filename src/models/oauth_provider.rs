use super::country::CountryCode;
use super::session::{AttemptRequest, ConsentRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// https://docs.saltedge.com/account_information/v5/#oauth_providers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOAuthProvider {
    pub customer_id: String,
    pub country_code: CountryCode,
    pub provider_code: String,
    pub consent: ConsentRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReconnectOAuthProvider {
    pub connection_id: String,
    pub consent: ConsentRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_connection_id: Option<bool>,
}

/// Completes an OAuth flow when the client owns the provider keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthorizeOAuthProvider {
    pub connection_id: String,
    /// Query string the provider redirected back with
    pub query_string: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OAuthProviderResponse {
    #[serde(default)]
    pub connection_id: Option<String>,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorizeOAuthProviderResponse {
    pub connection_id: String,
    pub attempt_id: String,
    pub token: String,
}

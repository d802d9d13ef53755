use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A scoped, time-bounded data access authorization given by a customer
// https://docs.saltedge.com/account_information/v5/#consents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consent {
    pub id: String,
    #[serde(default)]
    pub connection_id: Option<String>,
    pub customer_id: String,
    pub scopes: Vec<String>,
    #[serde(default)]
    pub period_days: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    /// `client` or `saltedge`
    #[serde(default)]
    pub collected_by: Option<String>,
    #[serde(default)]
    pub revoked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub revoke_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Consent {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

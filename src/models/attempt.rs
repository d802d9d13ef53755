use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fetch cycle against a connection
// https://docs.saltedge.com/account_information/v5/#attempts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attempt {
    pub id: String,
    #[serde(default)]
    pub api_mode: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub automatic_fetch: bool,
    #[serde(default)]
    pub daily_refresh: bool,
    #[serde(default)]
    pub categorization: Option<String>,
    #[serde(default)]
    pub consent_id: Option<String>,
    #[serde(default)]
    pub custom_fields: Option<Value>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub remote_ip: Option<String>,
    #[serde(default)]
    pub fetch_scopes: Vec<String>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub partial: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub finished_recent: bool,
    #[serde(default)]
    pub store_credentials: bool,
    #[serde(default)]
    pub user_present: bool,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub fail_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fail_error_class: Option<String>,
    #[serde(default)]
    pub fail_message: Option<String>,
    #[serde(default)]
    pub success_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_stage: Option<Stage>,
    /// Only included by attempt show
    #[serde(default)]
    pub stages: Vec<Stage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Attempt {
    pub fn failed(&self) -> bool {
        self.fail_at.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stage {
    pub id: String,
    /// e.g. `start`, `connect`, `interactive`, `fetch_accounts`, `finish`
    pub name: String,
    #[serde(default)]
    pub interactive_html: Option<String>,
    #[serde(default)]
    pub interactive_fields_names: Option<Vec<String>>,
    #[serde(default)]
    pub interactive_fields_options: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

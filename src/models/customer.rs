use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// https://docs.saltedge.com/account_information/v5/#customers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: String,
    pub identifier: String,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub blocked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewCustomer<'a> {
    pub(crate) identifier: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemovedCustomer {
    pub deleted: bool,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LockedCustomer {
    pub locked: bool,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnlockedCustomer {
    pub unlocked: bool,
    pub id: String,
}

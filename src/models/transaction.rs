use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;

// https://docs.saltedge.com/account_information/v5/#transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    #[serde(default)]
    pub duplicated: bool,
    pub mode: TransactionMode,
    pub status: TransactionStatus,
    pub made_on: NaiveDate,
    pub amount: Decimal,
    pub currency_code: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub extra: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionMode {
    Normal,
    Fee,
    Transfer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Posted,
    Pending,
}

/// Filters shared by the transaction listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionsQuery {
    pub connection_id: String,
    pub account_id: Option<String>,
    pub from_id: Option<String>,
}

impl TransactionsQuery {
    pub fn for_connection(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            ..Default::default()
        }
    }

    pub fn account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn from_id(mut self, from_id: Option<String>) -> Self {
        self.from_id = from_id;
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TransactionIds<'a> {
    pub(crate) customer_id: &'a str,
    pub(crate) transaction_ids: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct TransactionsCleanup<'a> {
    pub(crate) customer_id: &'a str,
    pub(crate) account_id: &'a str,
    pub(crate) keep_days: u32,
}

/// `true` once the API accepted every id in the batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicatedResponse {
    pub duplicated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnduplicatedResponse {
    pub unduplicated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemovedTransactions {
    pub cleanup_started: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TransactionRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    account_id: &'a str,
    made_on: NaiveDate,
    description: &'a str,
    amount: Decimal,
    currency: &'a str,
    category: &'a str,
    mode: TransactionMode,
    status: TransactionStatus,
    duplicated: bool,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        TransactionRow {
            id: &t.id,
            account_id: &t.account_id,
            made_on: t.made_on,
            description: &t.description,
            amount: t.amount,
            currency: &t.currency_code,
            category: &t.category,
            mode: t.mode,
            status: t.status,
            duplicated: t.duplicated,
        }
    }
}

/// Write transactions as CSV with a header row, `extra` is not included
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if transactions.is_empty() {
        writer.write_record(CSV_HEADERS)?;
    }
    for t in transactions {
        writer.serialize(TransactionRow::from(t))?;
    }

    writer.flush()?;
    Ok(())
}

const CSV_HEADERS: [&str; 10] = [
    "ID",
    "AccountId",
    "MadeOn",
    "Description",
    "Amount",
    "Currency",
    "Category",
    "Mode",
    "Status",
    "Duplicated",
];

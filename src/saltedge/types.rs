use serde::{Deserialize, Deserializer, Serialize};

// https://docs.saltedge.com/account_information/v5/#response
#[derive(Debug, Deserialize)]
pub(super) struct DataResponse<T> {
    pub(super) data: T,
}

/// Request bodies are wrapped the same way as responses: `{ "data": ... }`
#[derive(Debug, Serialize)]
pub(super) struct DataRequest<T> {
    pub(super) data: T,
}

/// One page of a collection plus the cursor for the next page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Paging,
}

impl<T> Page<T> {
    /// Cursor to pass as `from_id` on the next call, `None` once the collection is exhausted
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.next_id.as_deref()
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor().is_none()
    }
}

// https://docs.saltedge.com/account_information/v5/#pagination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, deserialize_with = "non_empty")]
    pub next_id: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub next_page: Option<String>,
}

// The API sends `null` for the last page; an empty string is treated the same.
fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// https://docs.saltedge.com/account_information/v5/#errors
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    pub(super) error: RemoteError,
}

#[derive(Debug, Deserialize)]
pub(super) struct RemoteError {
    pub(super) class: String,
    pub(super) message: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub(super) documentation_url: Option<String>,
}

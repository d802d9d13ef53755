use crate::error::{Result, require};
use chrono::NaiveDate;
use reqwest::Method;
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A transport-agnostic description of one API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API root, e.g. `connections/123`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn query(mut self, params: QueryParams) -> Self {
        self.query = params.into_pairs();
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of a query parameter, if it was sent
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Query string builder that leaves out anything the caller did not set
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Absent and empty values are omitted rather than sent blank
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
        self
    }

    pub fn push_date(&mut self, key: &str, value: Option<NaiveDate>) -> &mut Self {
        if let Some(date) = value {
            self.push(key, format_date(date));
        }
        self
    }

    /// Flags default to `false` server side, so only `true` is transmitted
    pub fn push_flag(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.push(key, "true");
        }
        self
    }

    pub fn push_scope(&mut self, scope: Scope<'_>) -> &mut Self {
        let (key, value) = scope.pair();
        self.push(key, value)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Which owner a lookup is scoped to.
///
/// The API accepts either `connection_id` or `customer_id` and ignores the
/// customer when both are present, so only one of them can be expressed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    Connection(&'a str),
    Customer(&'a str),
}

impl<'a> Scope<'a> {
    fn pair(&self) -> (&'static str, &'a str) {
        match self {
            Scope::Connection(id) => ("connection_id", id),
            Scope::Customer(id) => ("customer_id", id),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (key, value) = self.pair();
        require(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_values_omitted() {
        let mut params = QueryParams::new();
        params
            .push_opt("from_id", None)
            .push_opt("country_code", Some(""))
            .push_date("from_date", None)
            .push_flag("include_fake_providers", false);

        assert!(params.is_empty());
    }

    #[test]
    fn test_present_values_sent() {
        let mut params = QueryParams::new();
        params
            .push_opt("from_id", Some("100"))
            .push_date("from_date", NaiveDate::from_ymd_opt(2024, 3, 7))
            .push_flag("include_fake_providers", true);

        assert_eq!(
            params.into_pairs(),
            vec![
                ("from_id".to_string(), "100".to_string()),
                ("from_date".to_string(), "2024-03-07".to_string()),
                ("include_fake_providers".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_connection_scope_sends_only_connection_id() {
        let mut params = QueryParams::new();
        params.push_scope(Scope::Connection("conn_1"));
        let request = ApiRequest::get("accounts").query(params);

        assert_eq!(request.query_value("connection_id"), Some("conn_1"));
        assert_eq!(request.query_value("customer_id"), None);
    }

    #[test]
    fn test_scope_validation() {
        assert!(Scope::Customer("").validate().is_err());
        assert!(Scope::Connection("conn_1").validate().is_ok());
    }
}

use percent_encoding::percent_decode_str;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaltEdgeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Salt Edge API error ({status}) {class}: {message}")]
    RemoteApi {
        status: StatusCode,
        class: String,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Pagination error: {0}")]
    Pagination(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Progress template error: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

impl SaltEdgeError {
    /// Remote error class (e.g. `ProviderNotFound`) when the API rejected the call
    pub fn remote_class(&self) -> Option<&str> {
        match self {
            SaltEdgeError::RemoteApi { class, .. } => Some(class),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SaltEdgeError>;

/// Fail with `InvalidArgument` when a required identifier is empty
pub(crate) fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SaltEdgeError::InvalidArgument(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(())
}

/// Like [`require`], for ids placed in a URL path. `.` and `..` (also when
/// percent-encoded) would be resolved as dot-segments and change the route.
pub(crate) fn require_segment(name: &str, value: &str) -> Result<()> {
    require(name, value)?;
    let decoded = percent_decode_str(value.trim()).decode_utf8_lossy();
    if decoded == "." || decoded == ".." {
        return Err(SaltEdgeError::InvalidArgument(format!(
            "{} must not be a dot segment: {:?}",
            name, value
        )));
    }
    Ok(())
}

/// Fail with `InvalidArgument` when a required id list is empty or holds an empty id
pub(crate) fn require_all<S: AsRef<str>>(name: &str, values: &[S]) -> Result<()> {
    if values.is_empty() {
        return Err(SaltEdgeError::InvalidArgument(format!(
            "{} must contain at least one id",
            name
        )));
    }
    for (idx, value) in values.iter().enumerate() {
        require(&format!("{}[{}]", name, idx), value.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert!(matches!(
            require("customer_id", ""),
            Err(SaltEdgeError::InvalidArgument(_))
        ));
        assert!(matches!(
            require("customer_id", "   "),
            Err(SaltEdgeError::InvalidArgument(_))
        ));
        assert!(require("customer_id", "cust_1").is_ok());
    }

    #[test]
    fn test_require_segment_rejects_dot_segments() {
        for id in [".", "..", "%2e", "%2E%2e", " .. "] {
            assert!(
                matches!(
                    require_segment("customer_id", id),
                    Err(SaltEdgeError::InvalidArgument(_))
                ),
                "{:?} accepted",
                id
            );
        }
        assert!(require_segment("customer_id", "").is_err());
        assert!(require_segment("customer_id", "...").is_ok());
        assert!(require_segment("customer_id", "a.b").is_ok());
    }

    #[test]
    fn test_require_all() {
        let empty: Vec<String> = vec![];
        assert!(require_all("transaction_ids", &empty).is_err());

        let err = require_all("transaction_ids", &["tx_1", ""]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: transaction_ids[1] must not be empty"
        );

        assert!(require_all("transaction_ids", &["tx_1", "tx_2"]).is_ok());
    }

    #[test]
    fn test_csv_error_converts() {
        let err: SaltEdgeError = csv::Error::from(std::io::Error::other("disk full")).into();

        assert!(matches!(err, SaltEdgeError::Csv(_)));
        assert_eq!(err.to_string(), "CSV error: disk full");
    }

    #[test]
    fn test_remote_class() {
        let err = SaltEdgeError::RemoteApi {
            status: StatusCode::NOT_FOUND,
            class: "ProviderNotFound".to_string(),
            message: "Provider with code: 'nope' was not found".to_string(),
        };
        assert_eq!(err.remote_class(), Some("ProviderNotFound"));
        assert_eq!(SaltEdgeError::Pagination("x".into()).remote_class(), None);
    }
}

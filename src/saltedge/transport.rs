use super::request::ApiRequest;
use crate::config::SaltEdgeConfig;
use crate::error::{Result, SaltEdgeError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

// Header names are case-insensitive; `from_static` requires lowercase.
const APP_ID_HEADER: &str = "app-id";
const SECRET_HEADER: &str = "secret";

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

pub struct ReqwestTransport {
    client: Client,
    api_base_url: Url,
}

impl ReqwestTransport {
    pub fn new(config: &SaltEdgeConfig) -> Result<Self> {
        let api_base_url = Url::parse(&config.api_base_url())
            .map_err(|e| SaltEdgeError::Config(format!("Invalid base URL: {}", e)))?;

        let client = Client::builder()
            .default_headers(Self::credential_headers(config)?)
            .build()?;

        Ok(Self {
            client,
            api_base_url,
        })
    }

    fn credential_headers(config: &SaltEdgeConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in [
            (APP_ID_HEADER, &config.app_id),
            (SECRET_HEADER, &config.secret),
        ] {
            let mut value = HeaderValue::from_str(value).map_err(|e| {
                SaltEdgeError::Config(format!("Invalid {} header value: {}", name, e))
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(name), value);
        }

        Ok(headers)
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        let url = self
            .api_base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SaltEdgeError::InvalidArgument(format!("Invalid path {}: {}", path, e)))?;

        // The resolved URL must name a resource below the API root
        if url.path() == self.api_base_url.path()
            || !url.as_str().starts_with(self.api_base_url.as_str())
        {
            return Err(SaltEdgeError::InvalidArgument(format!(
                "Path {} does not resolve below {}",
                path, self.api_base_url
            )));
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.url_for(&request.path)?;
        debug!(method = %request.method, path = %request.path, "Sending request");

        let mut builder = self.client.request(request.method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, "Received response");

        Ok(RawResponse { status, body })
    }
}

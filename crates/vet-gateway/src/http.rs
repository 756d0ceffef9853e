//! reqwest-backed transport.

use std::time::Duration;

use vet_config::BackendConfig;

use crate::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

const USER_AGENT: &str = concat!("vet/", env!("CARGO_PKG_VERSION"));

/// Talks to a real backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the reqwest client fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a transport from the `[backend]` config section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &BackendConfig) -> Result<Self, TransportError> {
        Self::new(config.normalized_base_url(), config.timeout())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        tracing::debug!(method = request.method.as_str(), %url, "sending request");
        into_api_response(builder.send().await?).await
    }
}

/// Collect status and body text; status interpretation is left to the gateway.
async fn into_api_response(resp: reqwest::Response) -> Result<ApiResponse, TransportError> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok(ApiResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn keeps_status_and_body() {
        let resp = mock_response(201, r#"{"id":7}"#);
        let api = into_api_response(resp).await.unwrap();
        assert_eq!(api, ApiResponse::new(201, r#"{"id":7}"#));
    }

    #[tokio::test]
    async fn error_status_is_not_a_transport_error() {
        let resp = mock_response(503, "");
        let api = into_api_response(resp).await.unwrap();
        assert_eq!(api.status, 503);
        assert!(!api.is_success());
    }

    #[test]
    fn base_url_is_normalized() {
        let transport =
            HttpTransport::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:3000");
        assert_eq!(
            transport.url_for("/ideas/1/approve"),
            "http://localhost:3000/ideas/1/approve"
        );
    }

    #[test]
    fn from_config_uses_backend_section() {
        let config = BackendConfig {
            base_url: "https://review.example.com".into(),
            ..Default::default()
        };
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.base_url(), "https://review.example.com");
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let transport =
            HttpTransport::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let err = transport.send(ApiRequest::get("/ideas")).await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}

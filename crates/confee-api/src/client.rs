//! reqwest-backed chat transport

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::{Error, Result},
    transport::Transport,
    types::{ChatRequest, ChatResponse},
};

/// Timeout applied to each chat call unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport posting to `<base>/chat`
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport for the given base URL with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a transport with an explicit timeout budget
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(Error::InvalidConfig("API URL is not configured".to_string()));
        }
        if timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let endpoint = format!("{}/chat", base);
        reqwest::Url::parse(&endpoint)
            .map_err(|e| Error::InvalidConfig(format!("invalid API URL '{}': {}", base, e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Timeout budget per request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        tracing::debug!("POST {} (session {})", self.endpoint, request.session_id);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            // The status decides the category; a body we can't read only
            // loses the detail.
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Chat endpoint returned {}", status);
            return Err(Error::from_status(status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(e, self.timeout))?;

        serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
    }
}

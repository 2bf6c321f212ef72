use std::time::Duration;

use profiles_domain::{ErrorPayload, ProfileError, RemoteError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

/// HTTP transport with uniform error normalization.
///
/// Network-level failures surface as [`ProfileError::Transport`]; any
/// non-2xx response surfaces as [`ProfileError::Remote`] carrying the
/// response status and the decoded server error payload. Callers therefore
/// never branch on transport-library error shapes.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ProfileError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Exactly one request is issued; there is no retry. The response is
    /// returned only for 2xx statuses.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ProfileError> {
        let request = builder.build().map_err(|err| ProfileError::Transport(err.to_string()))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| ProfileError::Transport(err.to_string()))?;

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        if status.is_success() {
            return Ok(response);
        }

        Err(ProfileError::Remote(normalize_error(response).await))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
    accept_invalid_certs: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: None,
            default_headers: None,
            accept_invalid_certs: false,
        }
    }
}

impl HttpClientBuilder {
    /// Timeout applied to every request issued by the client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User-agent header sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Headers attached to every request.
    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Test-only helper to allow insecure TLS (e.g., self-signed certs).
    #[cfg(test)]
    pub fn accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.accept_invalid_certs = enabled;
        self
    }

    /// Build the configured client.
    pub fn build(self) -> Result<HttpClient, ProfileError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| ProfileError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(HttpClient { client })
    }
}

/// Decode a non-2xx response into a [`RemoteError`].
///
/// Message fallback order: server `message` field, then the raw body text,
/// then a generic status line.
async fn normalize_error(response: Response) -> RemoteError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let payload = serde_json::from_str::<ErrorPayload>(&body).unwrap_or_default();
    payload.into_remote(status, &body)
}

//! HTTP transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{trace, warn};

use crate::domain::errors::TransportError;
use crate::domain::ports::{HttpResponse, HttpTransport};

const USER_AGENT: &str = concat!("poster-cache/", env!("CARGO_PKG_VERSION"));

/// Transport issuing plain GET requests with client defaults.
/// No retries; no timeout beyond what the client is built with.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

pub(crate) fn classify(e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else if e.is_body() || e.is_decode() {
        TransportError::Body(e.to_string())
    } else {
        TransportError::Other(e.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            classify(&e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to read response body");
            classify(&e)
        })?;

        trace!(url = %url, status, bytes = body.len(), "HTTP response received");
        Ok(HttpResponse { status, body })
    }
}

//! Port definition for the upstream HTTP transport.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

use crate::domain::errors::TransportError;

/// Raw response as seen by the image pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for statuses in the inclusive 200-299 range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// Port for issuing a single HTTP GET.
/// Implementations must be thread-safe and must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetches `url` and returns the status and body, whatever the status.
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

//! Catalog search error types.

use thiserror::Error;

use super::TransportError;

/// Catalog error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("catalog returned HTTP {code}")]
    BadStatus { code: u16 },

    #[error("failed to parse catalog response: {message}")]
    Parse { message: String },

    #[error("catalog error: {message}")]
    Api { message: String },

    #[error("catalog is not configured: {reason}")]
    NotConfigured { reason: String },
}

impl CatalogError {
    /// Creates parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates API error.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Creates not-configured error.
    #[must_use]
    pub fn not_configured(reason: impl Into<String>) -> Self {
        Self::NotConfigured {
            reason: reason.into(),
        }
    }
}

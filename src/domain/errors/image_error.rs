//! Image loading error types.

use thiserror::Error;

/// Lower-level network failure reported by an HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("failed to connect: {0}")]
    Connect(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Other(String),
}

/// Image loading error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ImageError {
    #[error("image request failed (HTTP {code})")]
    BadStatus { code: u16 },

    #[error("failed to decode image: {message}")]
    Decode { message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid image url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ImageError {
    /// Creates bad status error.
    #[must_use]
    pub const fn bad_status(code: u16) -> Self {
        Self::BadStatus { code }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status code for status failures.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadStatus { code } => Some(*code),
            _ => None,
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_message() {
        let err = ImageError::bad_status(503);
        assert_eq!(err.to_string(), "image request failed (HTTP 503)");
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_transport_is_transparent() {
        let err = ImageError::from(TransportError::Timeout);
        assert_eq!(err.to_string(), "request timed out");
        assert!(err.is_network_error());
        assert_eq!(err.status_code(), None);
    }
}

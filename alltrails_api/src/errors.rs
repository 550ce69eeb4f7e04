//! Error types for the page fetcher.

use std::time::Duration;

/// Errors that can occur while fetching a page from the trail site.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The request or body read exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    /// The site answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },
    /// DNS, connect, TLS or body-read failure.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },
    /// The base URL could not be parsed. Raised before any request is sent.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Timeout,
    HttpStatus,
    Network,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Timeout { .. } => FetchErrorKind::Timeout,
            Self::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            Self::Network { .. } | Self::InvalidUrl { .. } => FetchErrorKind::Network,
        }
    }

    /// HTTP status code, when the failure was a status failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_each_variant() {
        let timeout = FetchError::Timeout {
            url: "http://x".into(),
            timeout: Duration::from_secs(3),
        };
        assert_eq!(timeout.kind(), FetchErrorKind::Timeout);

        let status = FetchError::HttpStatus {
            status: 429,
            url: "http://x".into(),
        };
        assert_eq!(status.kind(), FetchErrorKind::HttpStatus);
        assert_eq!(status.status(), Some(429));

        let bad_url = FetchError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(bad_url.kind(), FetchErrorKind::Network);
        assert_eq!(bad_url.status(), None);
    }

    #[test]
    fn display_carries_status_code() {
        let err = FetchError::HttpStatus {
            status: 503,
            url: "https://www.alltrails.com/parks/us/a/b".into(),
        };
        assert!(err.to_string().contains("503"));
    }
}

//! Error types for the library layer.

use alltrails_api::{FetchError, FetchErrorKind};

use crate::document::ParseError;

/// Errors produced by the scraping pipeline.
///
/// Each failure is returned to the caller as-is; nothing here retries.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// The page could not be fetched.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
    /// The page body could not be turned into a document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// The trail page has no trail title, so the slug names no trail.
    #[error("trail not found: {slug}")]
    NotFound { slug: String },
    /// User-provided input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// What a caller should tell the user about a [`ScrapeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The site could not be reached or refused the request.
    Unreachable,
    /// The identifier does not name a trail.
    NotFound,
    /// The site answered with something that is not a usable page.
    UnexpectedContent,
    /// The identifier was malformed and never sent.
    InvalidInput,
}

impl ErrorCategory {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unreachable => "could not reach the source",
            Self::NotFound => "that identifier does not exist",
            Self::UnexpectedContent => "source returned unexpected content",
            Self::InvalidInput => "invalid identifier",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(err) if err.status() == Some(404) => ErrorCategory::NotFound,
            Self::Fetch(_) => ErrorCategory::Unreachable,
            Self::Parse(_) => ErrorCategory::UnexpectedContent,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidInput(_) => ErrorCategory::InvalidInput,
        }
    }

    /// Whether repeating the same request might succeed: timeouts, transport
    /// failures, throttling and server errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch(err) => match err.kind() {
                FetchErrorKind::Timeout => true,
                FetchErrorKind::Network => !matches!(err, FetchError::InvalidUrl { .. }),
                FetchErrorKind::HttpStatus => err
                    .status()
                    .is_some_and(|status| status == 429 || status >= 500),
            },
            _ => false,
        }
    }
}

//! Library layer for the AllTrails scraper: page parsing, field extraction,
//! normalization, and identifier validation.
//!
//! Wraps the `alltrails_api` fetcher with the HTML pipeline that turns a park
//! or trail page into typed trail records.

pub mod document;
pub mod error;
pub mod extract;
pub mod locators;
pub mod normalize;
pub mod scrape;
pub mod validation;

pub use alltrails_api;
pub use alltrails_api::types;
pub use alltrails_api::{
    FetchConfig, FetchError, FetchErrorKind, Fetcher, ParkSlug, TrailDetail, TrailSlug,
    TrailSummary,
};

pub use document::{Document, Node, ParseError};
pub use error::{ErrorCategory, ScrapeError};
pub use extract::{extract_detail, extract_search, RawTrailFields};
pub use normalize::{normalize_detail, normalize_summary};
pub use scrape::TrailScraper;

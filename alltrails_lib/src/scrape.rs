//! Trail search and trail detail over AllTrails HTML pages (no API).

use alltrails_api::{FetchConfig, Fetcher, ParkSlug, TrailDetail, TrailSlug, TrailSummary};

use crate::document::Document;
use crate::error::ScrapeError;
use crate::extract::{extract_detail, extract_search};
use crate::normalize::{normalize_detail, normalize_summary};

/// Runs fetch, parse, extract and normalize for the two trail queries.
///
/// Each call performs exactly one request and one pass over the page. The
/// scraper only holds immutable configuration, so one instance can serve
/// concurrent callers.
pub struct TrailScraper {
    fetcher: Fetcher,
}

impl TrailScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: Fetcher::new()?,
        })
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: Fetcher::with_base_url(base_url)?,
        })
    }

    pub fn with_config(config: FetchConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: Fetcher::with_config(config)?,
        })
    }

    /// Trails listed on the park page, in page order. An empty page gives an
    /// empty vector.
    pub async fn search_trails(&self, park: &ParkSlug) -> Result<Vec<TrailSummary>, ScrapeError> {
        let html = self.fetcher.fetch_park_page(park).await?;
        self.parse_search_page(&html, park)
    }

    /// Full record for one trail. A page without a trail title is
    /// [`ScrapeError::NotFound`].
    pub async fn trail_details(&self, slug: &TrailSlug) -> Result<TrailDetail, ScrapeError> {
        let html = self.fetcher.fetch_trail_page(slug).await?;
        self.parse_trail_page(&html, slug)
    }

    /// Parses an already fetched park page.
    pub fn parse_search_page(
        &self,
        html: &str,
        park: &ParkSlug,
    ) -> Result<Vec<TrailSummary>, ScrapeError> {
        let doc = Document::parse(html)?;
        let trails = extract_search(&doc, park)
            .iter()
            .map(|raw| {
                let mut summary = normalize_summary(raw);
                summary.url = self.url_for(summary.slug.as_deref());
                summary
            })
            .collect();
        Ok(trails)
    }

    /// Parses an already fetched trail page.
    pub fn parse_trail_page(
        &self,
        html: &str,
        slug: &TrailSlug,
    ) -> Result<TrailDetail, ScrapeError> {
        let doc = Document::parse(html)?;
        let raw = extract_detail(&doc, slug)?;
        let mut detail = normalize_detail(&raw);
        detail.summary.url = Some(self.fetcher.trail_url(slug));
        Ok(detail)
    }

    fn url_for(&self, slug: Option<&str>) -> Option<String> {
        let slug = TrailSlug::new(slug?).ok()?;
        Some(self.fetcher.trail_url(&slug))
    }
}

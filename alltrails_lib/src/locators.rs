//! Where each field lives in the site's markup.
//!
//! Every assumption about AllTrails' HTML is in the tables below. Each field
//! has an ordered list of lookups (selector plus what to read from the match),
//! an optional text pattern tried against the surrounding text when no lookup
//! hits, and an optional refinement of the raw value. When the site changes,
//! edit the entry for the field that broke and nothing else.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::document::Node;
use crate::normalize::{parse_distance, parse_elevation, parse_rating};

/// Fields the extractors can pull out of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Slug,
    Difficulty,
    Length,
    ElevationGain,
    Rating,
    RouteType,
    Excerpt,
    Description,
    Park,
}

/// What to read from a matched element.
#[derive(Debug, Clone, Copy)]
pub enum Read {
    Text,
    Attr(&'static str),
}

/// One selector to try for a field.
#[derive(Debug, Clone, Copy)]
pub struct Lookup {
    pub selector: &'static str,
    pub read: Read,
}

impl Lookup {
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector,
            read: Read::Text,
        }
    }

    pub const fn attr(selector: &'static str, name: &'static str) -> Self {
        Self {
            selector,
            read: Read::Attr(name),
        }
    }
}

/// Lookup recipe for one field.
#[derive(Clone, Copy)]
pub struct FieldLocator {
    pub field: Field,
    pub lookups: &'static [Lookup],
    /// Regex over the scope's visible text. Capture group 1 is used when the
    /// pattern has one, otherwise the whole match.
    pub pattern: Option<&'static str>,
    pub refine: Option<fn(&str) -> Option<String>>,
}

impl FieldLocator {
    /// Runs the lookups in order, then the text pattern. Returns the first
    /// non-empty value that survives refinement.
    pub fn locate(&self, scope: Node<'_>, scope_text: Option<&str>) -> Option<String> {
        let found = self.lookups.iter().find_map(|lookup| {
            let node = scope.find_first(&[lookup.selector])?;
            let raw = match lookup.read {
                Read::Text => node.text(),
                Read::Attr(name) => node.attr(name).map(str::to_string),
            }?;
            self.finish(&raw)
        });
        if found.is_some() {
            return found;
        }

        let pattern = self.pattern?;
        let text = scope_text?;
        let re = compiled_pattern(self.field, pattern)?;
        let caps = re.captures(text)?;
        let matched = caps.get(1).or_else(|| caps.get(0))?;
        tracing::debug!("{:?} taken from text pattern: {:?}", self.field, matched.as_str());
        self.finish(matched.as_str())
    }

    fn finish(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match self.refine {
            Some(refine) => refine(trimmed),
            None => Some(trimmed.to_string()),
        }
    }
}

// -- Park page --

/// Repeating container of one trail on a park page.
pub const SEARCH_ENTRY: &[&str] = &[
    "div[data-testid='trail-card']",
    "article[data-testid='trail-card']",
    "li[data-testid='trail-card']",
    "div.trail-card",
    ".styles-module__container___3ZXxx",
];

/// Bare trail links, used when no entry container is present.
pub const TRAIL_LINKS: &[&str] = &["a[href*='/trail/']"];

pub const SEARCH_FIELDS: &[FieldLocator] = &[
    FieldLocator {
        field: Field::Name,
        lookups: &[
            Lookup::text("a[data-testid='trail-card-title-link']"),
            Lookup::text("[data-testid='trail-card-title']"),
            Lookup::text("h3"),
            Lookup::text("a[href*='/trail/']"),
            Lookup::text("span[class*='name']"),
            Lookup::text("span[class*='title']"),
        ],
        pattern: None,
        refine: None,
    },
    FieldLocator {
        field: Field::Slug,
        lookups: &[
            Lookup::attr("a[data-testid='trail-card-title-link']", "href"),
            Lookup::attr("a[href*='/trail/']", "href"),
        ],
        pattern: None,
        refine: Some(slug_from_href),
    },
    FieldLocator {
        field: Field::Difficulty,
        lookups: &[
            Lookup::text("[data-testid='trail-card-difficulty']"),
            Lookup::text("span[class*='difficulty']"),
            Lookup::text("div[class*='difficulty']"),
        ],
        pattern: Some(r"(?i)\b(easy|moderate|hard)\b"),
        refine: None,
    },
    FieldLocator {
        field: Field::Length,
        lookups: &[
            Lookup::text("[data-testid='trail-card-length']"),
            Lookup::text("[class*='length']"),
        ],
        pattern: Some(r"(?i)(\d[\d,]*(?:\.\d+)?\s*(?:mi|miles|km|kilometers)\b)"),
        refine: Some(has_distance),
    },
    FieldLocator {
        field: Field::ElevationGain,
        lookups: &[
            Lookup::text("[data-testid='trail-card-elevation']"),
            Lookup::text("[class*='elevation']"),
        ],
        pattern: Some(
            r"(?i)(?:elev(?:ation)?(?:\s+gain)?|gain)[:\s]*(\d[\d,]*(?:\.\d+)?\s*(?:ft|feet|m|meters)\b)",
        ),
        refine: Some(has_elevation),
    },
    FieldLocator {
        field: Field::Rating,
        lookups: &[
            Lookup::text("[data-testid='trail-card-rating']"),
            Lookup::text("span[class*='rating']"),
        ],
        pattern: Some(r"(\d+(?:\.\d+)?)\s*(?:stars?|★)"),
        refine: Some(has_rating),
    },
    FieldLocator {
        field: Field::RouteType,
        lookups: &[
            Lookup::text("[data-testid='trail-card-route-type']"),
            Lookup::text("[class*='route-type']"),
        ],
        pattern: Some(r"(?i)\b(loop|out\s*(?:&|and)\s*back|point\s*to\s*point)\b"),
        refine: None,
    },
    FieldLocator {
        field: Field::Excerpt,
        lookups: &[
            Lookup::text("p[data-testid='trail-card-description']"),
            Lookup::text("div.styles-module__text___1Jt3Z"),
            Lookup::text(".trail-description"),
            Lookup::text("p"),
        ],
        pattern: None,
        refine: None,
    },
];

// -- Trail page --

/// Title element carried by every real trail page. Its absence means the page
/// is not a trail.
pub const DETAIL_TITLE: &[&str] = &[
    "h1[data-testid='trail-title']",
    "[data-testid='trail-name']",
    "h1.styles-module__title___1BPJy",
    "h1[itemprop='name']",
];

/// One element per tag in the tags/amenities region.
pub const DETAIL_TAGS: &[&str] = &[
    "[data-testid='trail-tags'] a",
    "[data-testid='trail-tags'] span",
    "section[class*='tags'] a",
    ".tag-cloud .tag",
    "span.tag",
];

pub const DETAIL_FIELDS: &[FieldLocator] = &[
    FieldLocator {
        field: Field::Difficulty,
        lookups: &[
            Lookup::text("[data-testid='trail-difficulty']"),
            Lookup::text("span[class*='difficulty']"),
        ],
        pattern: Some(r"(?i)Difficulty[:\s]*(Easy|Moderate|Hard)"),
        refine: None,
    },
    FieldLocator {
        field: Field::Length,
        lookups: &[
            Lookup::text("[data-testid='trail-length']"),
            Lookup::text(".trail-stats [class*='length']"),
        ],
        pattern: Some(r"(?i)Length[:\s]*(\d[\d,]*(?:\.\d+)?\s*(?:mi|miles|km|kilometers)\b)"),
        refine: Some(has_distance),
    },
    FieldLocator {
        field: Field::ElevationGain,
        lookups: &[
            Lookup::text("[data-testid='trail-elevation']"),
            Lookup::text(".trail-stats [class*='elevation']"),
        ],
        pattern: Some(
            r"(?i)Elevation(?:\s+gain)?[:\s]*(\d[\d,]*(?:\.\d+)?\s*(?:ft|feet|m|meters)\b)",
        ),
        refine: Some(has_elevation),
    },
    FieldLocator {
        field: Field::Rating,
        lookups: &[
            Lookup::text("[data-testid='trail-rating']"),
            Lookup::text(".reviewRating"),
            Lookup::text(".rating-display"),
            Lookup::attr("meta[itemprop='ratingValue']", "content"),
        ],
        pattern: None,
        refine: Some(has_rating),
    },
    FieldLocator {
        field: Field::RouteType,
        lookups: &[
            Lookup::text("[data-testid='trail-route-type']"),
            Lookup::text("[class*='route-type']"),
        ],
        pattern: Some(
            r"(?i)Route\s+type[:\s]*(Out\s*&\s*back|Out\s+and\s+back|Loop|Point\s+to\s+point)",
        ),
        refine: None,
    },
    FieldLocator {
        field: Field::Description,
        lookups: &[
            Lookup::text("[data-testid='trail-description']"),
            Lookup::text("div.styles-module__text___1Jt3Z"),
            Lookup::text(".trail-description"),
            Lookup::attr("meta[name='description']", "content"),
            Lookup::attr("meta[property='og:description']", "content"),
        ],
        pattern: None,
        refine: None,
    },
    FieldLocator {
        field: Field::Park,
        lookups: &[
            Lookup::attr("[data-testid='breadcrumb'] a[href*='/parks/']", "href"),
            Lookup::attr("nav[aria-label='breadcrumb'] a[href*='/parks/']", "href"),
            Lookup::attr("a[href*='/parks/']", "href"),
        ],
        pattern: None,
        refine: Some(park_from_href),
    },
];

/// Compiled form of every table pattern.
static TABLE_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    SEARCH_FIELDS
        .iter()
        .chain(DETAIL_FIELDS)
        .filter_map(|loc| {
            let pattern = loc.pattern?;
            match Regex::new(pattern) {
                Ok(re) => Some((pattern, re)),
                Err(e) => {
                    tracing::warn!("Skipping invalid pattern for {:?}: {}", loc.field, e);
                    None
                }
            }
        })
        .collect()
});

fn compiled_pattern(field: Field, pattern: &'static str) -> Option<Regex> {
    if let Some(re) = TABLE_PATTERNS.get(pattern) {
        return Some(re.clone());
    }
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Skipping invalid pattern for {:?}: {}", field, e);
            None
        }
    }
}

// A lookup can land on a label ("Length") instead of the value next to it.
// These keep such text from shadowing later lookups and the text pattern.

fn has_distance(raw: &str) -> Option<String> {
    parse_distance(raw).map(|_| raw.to_string())
}

fn has_elevation(raw: &str) -> Option<String> {
    parse_elevation(raw).map(|_| raw.to_string())
}

fn has_rating(raw: &str) -> Option<String> {
    parse_rating(raw).map(|_| raw.to_string())
}

/// Trail slug from a link such as `/trail/us/tennessee/alum-cave?ref=x`.
pub fn slug_from_href(href: &str) -> Option<String> {
    path_after(href, "/trail/")
}

/// Park slug from a link such as `https://www.alltrails.com/parks/us/utah/zion`.
pub fn park_from_href(href: &str) -> Option<String> {
    path_after(href, "/parks/")
}

fn path_after(href: &str, marker: &str) -> Option<String> {
    let start = href.find(marker)? + marker.len();
    let rest = &href[start..];
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    let path = rest[..end].trim_matches('/');
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

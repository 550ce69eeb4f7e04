//! Park and trail identifiers.
//!
//! Both are opaque path tokens copied from the site's URLs. They are checked
//! for basic path shape only; whether the park or trail exists is only known
//! once the page is fetched.

use serde::{Deserialize, Serialize};

/// Why a string was rejected as a slug.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
    #[error("slug contains an empty path segment")]
    EmptySegment,
    #[error("slug contains forbidden character {0:?}")]
    ForbiddenChar(char),
    #[error("slug contains a relative path segment")]
    RelativeSegment,
    #[error("park slug must have the form <country>/<state>/<park-name>, got {0} segment(s)")]
    ParkShape(usize),
}

/// Park identifier, e.g. `us/tennessee/great-smoky-mountains-national-park`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParkSlug(String);

/// Trail identifier: the part of a trail URL after `/trail/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailSlug(String);

impl ParkSlug {
    pub fn new(raw: &str) -> Result<Self, SlugError> {
        let path = check_path(raw)?;
        let segments = path.split('/').count();
        if segments != 3 {
            return Err(SlugError::ParkShape(segments));
        }
        Ok(Self(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TrailSlug {
    pub fn new(raw: &str) -> Result<Self, SlugError> {
        check_path(raw).map(|path| Self(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParkSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for TrailSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims surrounding whitespace and slashes, then checks each segment.
fn check_path(raw: &str) -> Result<&str, SlugError> {
    let path = raw.trim().trim_matches('/');
    if path.is_empty() {
        return Err(SlugError::Empty);
    }
    if let Some(c) = path
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '?' | '#' | '\\'))
    {
        return Err(SlugError::ForbiddenChar(c));
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(SlugError::EmptySegment),
            "." | ".." => return Err(SlugError::RelativeSegment),
            _ => {}
        }
    }
    Ok(path)
}

use alltrails_api::{ParkSlug, TrailSlug};

use crate::error::ScrapeError;
use crate::locators::{park_from_href, slug_from_href};

pub const MAX_SLUG_LENGTH: usize = 200;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, ScrapeError> {
    if input.len() > max_len {
        return Err(ScrapeError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ScrapeError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a park slug such as `us/tennessee/great-smoky-mountains-national-park`.
/// A full park URL is accepted and reduced to its slug.
pub fn validate_park_slug(input: &str) -> Result<ParkSlug, ScrapeError> {
    let sanitized = sanitize_text(input, MAX_SLUG_LENGTH)?;
    let candidate = park_from_href(&sanitized).unwrap_or(sanitized);
    ParkSlug::new(&candidate).map_err(|e| {
        ScrapeError::InvalidInput(format!(
            "invalid park slug '{}': {}. Expected e.g. 'us/tennessee/great-smoky-mountains-national-park'",
            input.trim(),
            e
        ))
    })
}

/// Validate a trail slug, the part of a trail URL after `/trail/`.
/// A full trail URL is accepted and reduced to its slug.
pub fn validate_trail_slug(input: &str) -> Result<TrailSlug, ScrapeError> {
    let sanitized = sanitize_text(input, MAX_SLUG_LENGTH)?;
    let candidate = slug_from_href(&sanitized).unwrap_or(sanitized);
    TrailSlug::new(&candidate).map_err(|e| {
        ScrapeError::InvalidInput(format!("invalid trail slug '{}': {}", input.trim(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_control_chars() {
        assert_eq!(
            sanitize_text("us/utah\u{0007}/zion\n", 100).unwrap(),
            "us/utah/zion"
        );
    }

    #[test]
    fn sanitize_rejects_empty_and_oversized() {
        assert!(matches!(
            sanitize_text(" \t ", 100),
            Err(ScrapeError::InvalidInput(_))
        ));
        let long = "a".repeat(MAX_SLUG_LENGTH + 1);
        assert!(sanitize_text(&long, MAX_SLUG_LENGTH).is_err());
    }

    #[test]
    fn park_slug_accepts_slug_or_url() {
        let slug = validate_park_slug("us/tennessee/great-smoky-mountains-national-park").unwrap();
        assert_eq!(slug.as_str(), "us/tennessee/great-smoky-mountains-national-park");

        let from_url =
            validate_park_slug("https://www.alltrails.com/parks/us/utah/zion-national-park?u=i")
                .unwrap();
        assert_eq!(from_url.as_str(), "us/utah/zion-national-park");
    }

    #[test]
    fn park_slug_rejects_bad_shape() {
        let err = validate_park_slug("zion").unwrap_err();
        assert!(err.to_string().contains("invalid park slug 'zion'"));
        assert!(validate_park_slug("").is_err());
    }

    #[test]
    fn trail_slug_accepts_slug_or_url() {
        assert_eq!(
            validate_trail_slug("us/california/half-dome-trail")
                .unwrap()
                .as_str(),
            "us/california/half-dome-trail"
        );
        assert_eq!(
            validate_trail_slug("https://www.alltrails.com/trail/us/california/half-dome-trail")
                .unwrap()
                .as_str(),
            "us/california/half-dome-trail"
        );
    }

    #[test]
    fn trail_slug_rejects_spaces() {
        assert!(validate_trail_slug("half dome").is_err());
    }
}

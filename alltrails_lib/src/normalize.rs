//! Raw field text to typed trail records.
//!
//! Every function here is total. Text that does not parse becomes `None` or
//! `Unknown` for that field only.

use alltrails_api::types::{
    Difficulty, Distance, DistanceUnit, Elevation, ElevationUnit, Measure, RouteType,
};
use alltrails_api::{ParkSlug, TrailDetail, TrailSummary};

use crate::extract::RawTrailFields;
use crate::locators::Field;

const MAX_RATING: f64 = 5.0;

/// Builds a summary record. `url` is left unset; the caller knows the site root.
pub fn normalize_summary(raw: &RawTrailFields) -> TrailSummary {
    TrailSummary {
        name: raw.get(Field::Name).map(str::to_string),
        slug: raw.get(Field::Slug).map(str::to_string),
        url: None,
        difficulty: raw
            .get(Field::Difficulty)
            .map(Difficulty::from_label)
            .unwrap_or_default(),
        length: raw.get(Field::Length).and_then(parse_distance),
        elevation_gain: raw.get(Field::ElevationGain).and_then(parse_elevation),
        rating: raw.get(Field::Rating).and_then(parse_rating),
        route_type: raw
            .get(Field::RouteType)
            .map(RouteType::from_label)
            .unwrap_or_default(),
        excerpt: raw.get(Field::Excerpt).map(str::to_string),
    }
}

pub fn normalize_detail(raw: &RawTrailFields) -> TrailDetail {
    TrailDetail {
        summary: normalize_summary(raw),
        description: raw.get(Field::Description).unwrap_or_default().to_string(),
        park: raw.get(Field::Park).and_then(|p| ParkSlug::new(p).ok()),
        tags: raw.tags.clone(),
    }
}

/// `"5.2 mi"` → 5.2 miles. Unit must be a length unit.
pub fn parse_distance(text: &str) -> Option<Distance> {
    let (value, token) = leading_measure(text)?;
    let unit = DistanceUnit::from_token(token)?;
    Some(Measure { value, unit })
}

/// `"1,234 ft"` → 1234 feet. Unit must be an elevation unit.
pub fn parse_elevation(text: &str) -> Option<Elevation> {
    let (value, token) = leading_measure(text)?;
    let unit = ElevationUnit::from_token(token)?;
    Some(Measure { value, unit })
}

/// Leading decimal in `0.0..=5.0`, e.g. `"4.6(2,310)"` → 4.6.
pub fn parse_rating(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let value: f64 = trimmed[..end].parse().ok()?;
    if value.is_finite() && (0.0..=MAX_RATING).contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// First number in `text` (thousands separators allowed) and the alphabetic
/// token right after it.
fn leading_measure(text: &str) -> Option<(f64, &str)> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let num_end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(rest.len());
    let cleaned = rest[..num_end].replace(',', "");
    let value: f64 = cleaned.trim_end_matches('.').parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let after = rest[num_end..].trim_start();
    let token_end = after
        .find(|c: char| !c.is_alphabetic())
        .unwrap_or(after.len());
    let token = &after[..token_end];
    if token.is_empty() {
        None
    } else {
        Some((value, token))
    }
}

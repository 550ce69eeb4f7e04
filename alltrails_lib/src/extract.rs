//! Search and detail extractors.
//!
//! Both walk a parsed page with the tables in [`crate::locators`] and return
//! raw text per field. A field that cannot be found is simply not set; one
//! missing field never drops the rest of the record.

use std::collections::{BTreeMap, HashSet};

use alltrails_api::{ParkSlug, TrailSlug};

use crate::document::{Document, Node};
use crate::error::ScrapeError;
use crate::locators::{
    slug_from_href, Field, FieldLocator, DETAIL_FIELDS, DETAIL_TAGS, DETAIL_TITLE,
    SEARCH_ENTRY, SEARCH_FIELDS, TRAIL_LINKS,
};

/// Cap on entries produced by the bare-link fallback.
pub const MAX_FALLBACK_LINKS: usize = 20;

/// Link texts this short are icons or "More" buttons, not trail names.
const MIN_LINK_NAME_LEN: usize = 4;

/// Untyped text pulled from one trail entry or trail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTrailFields {
    values: BTreeMap<Field, String>,
    pub tags: Vec<String>,
}

impl RawTrailFields {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn has(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }
}

/// Pulls one raw record per trail listed on a park page, in page order.
///
/// A page with no trail entries yields an empty vector.
pub fn extract_search(doc: &Document, park: &ParkSlug) -> Vec<RawTrailFields> {
    let cards = doc.find_all(SEARCH_ENTRY);
    if cards.is_empty() {
        let links = extract_trail_links(doc);
        tracing::info!(
            "No trail cards for {}, found {} trail links as fallback",
            park,
            links.len()
        );
        return links;
    }

    let mut trails = Vec::with_capacity(cards.len());
    for (index, card) in cards.iter().enumerate() {
        let card_text = card.text();
        let raw = locate_fields(*card, card_text.as_deref(), SEARCH_FIELDS);
        if !raw.has(Field::Name) && !raw.has(Field::Slug) {
            tracing::warn!("Skipping trail card {} with no name or link", index);
            continue;
        }
        trails.push(raw);
    }

    tracing::info!("Successfully extracted {} trails for {}", trails.len(), park);
    trails
}

/// Pulls the raw record for a trail page.
///
/// Fails with [`ScrapeError::NotFound`] when the page has no trail title,
/// whatever else it contains.
pub fn extract_detail(doc: &Document, slug: &TrailSlug) -> Result<RawTrailFields, ScrapeError> {
    let Some(title) = doc.find_first(DETAIL_TITLE) else {
        tracing::warn!("No trail title on page for {}", slug);
        return Err(ScrapeError::NotFound {
            slug: slug.to_string(),
        });
    };

    let page_text = doc.text();
    let mut raw = locate_fields(doc.root(), page_text.as_deref(), DETAIL_FIELDS);
    if let Some(name) = title.text() {
        raw.set(Field::Name, name);
    }
    raw.set(Field::Slug, slug.as_str());

    let mut seen = HashSet::new();
    for tag in doc.find_all(DETAIL_TAGS) {
        if let Some(label) = tag.text() {
            if seen.insert(label.to_lowercase()) {
                raw.tags.push(label);
            }
        }
    }

    Ok(raw)
}

fn locate_fields(
    scope: Node<'_>,
    scope_text: Option<&str>,
    table: &[FieldLocator],
) -> RawTrailFields {
    let mut raw = RawTrailFields::default();
    for locator in table {
        match locator.locate(scope, scope_text) {
            Some(value) => raw.set(locator.field, value),
            None => tracing::debug!("{:?} not found", locator.field),
        }
    }
    raw
}

/// Entries built from bare `/trail/` links: name and slug only, first
/// occurrence of each slug kept.
fn extract_trail_links(doc: &Document) -> Vec<RawTrailFields> {
    let mut seen = HashSet::new();
    let mut trails = Vec::new();
    for link in doc.find_all(TRAIL_LINKS) {
        let Some(slug) = link.attr("href").and_then(slug_from_href) else {
            continue;
        };
        let Some(name) = link.text() else {
            continue;
        };
        if name.chars().count() < MIN_LINK_NAME_LEN || !seen.insert(slug.clone()) {
            continue;
        }
        let mut raw = RawTrailFields::default();
        raw.set(Field::Name, name);
        raw.set(Field::Slug, slug);
        trails.push(raw);
        if trails.len() == MAX_FALLBACK_LINKS {
            break;
        }
    }
    trails
}

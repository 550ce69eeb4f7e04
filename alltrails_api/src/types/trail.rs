//! Trail records returned to callers.

use serde::{Deserialize, Serialize};

use super::{Distance, Elevation, ParkSlug};

/// Summary of a trail as listed on a park page.
///
/// Every field the page did not provide is `None` (or `Unknown` for the
/// enums). Nothing is defaulted to zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TrailSummary {
    /// Display name of the trail.
    pub name: Option<String>,

    /// Trail slug, the part of the trail URL after `/trail/`.
    pub slug: Option<String>,

    /// Absolute URL of the trail page.
    pub url: Option<String>,

    pub difficulty: Difficulty,

    /// Total length, in the unit the site printed.
    pub length: Option<Distance>,

    /// Elevation gain, in the unit the site printed.
    pub elevation_gain: Option<Elevation>,

    /// Average rating, 0.0 to 5.0.
    pub rating: Option<f64>,

    pub route_type: RouteType,

    /// Short blurb shown on the listing card.
    pub excerpt: Option<String>,
}

/// Full trail record from a trail page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TrailDetail {
    #[serde(flatten)]
    pub summary: TrailSummary,

    /// Free-text description. Empty when the page has none.
    pub description: String,

    /// Park the trail belongs to, from the page breadcrumb.
    pub park: Option<ParkSlug>,

    /// Tag labels such as "Dog friendly" or "Waterfall", in page order,
    /// without duplicates.
    pub tags: Vec<String>,
}

/// Trail difficulty rating.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    #[default]
    Unknown,
}

impl Difficulty {
    /// Maps a site label, case-insensitively. Unrecognised labels map to
    /// [`Difficulty::Unknown`]. `from_label(&d.to_string()) == d` for every
    /// variant.
    pub fn from_label(label: &str) -> Self {
        let lowered = label.trim().to_lowercase();
        let word = lowered
            .split(|c: char| !c.is_alphabetic())
            .find(|w| !w.is_empty())
            .unwrap_or("");
        match word {
            "easy" => Self::Easy,
            "moderate" => Self::Moderate,
            "hard" | "difficult" | "strenuous" => Self::Hard,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Difficulty::Easy => "easy",
                Difficulty::Moderate => "moderate",
                Difficulty::Hard => "hard",
                Difficulty::Unknown => "unknown",
            }
        )
    }
}

/// Route shape.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteType {
    Loop,
    OutAndBack,
    PointToPoint,
    #[default]
    Unknown,
}

impl RouteType {
    /// Maps a site label such as "Out & back" or "point-to-point",
    /// case-insensitively. Unrecognised labels map to [`RouteType::Unknown`].
    pub fn from_label(label: &str) -> Self {
        let canonical = label
            .to_lowercase()
            .replace('&', " and ")
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        match canonical.as_str() {
            "loop" => Self::Loop,
            "out and back" => Self::OutAndBack,
            "point to point" => Self::PointToPoint,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RouteType::Loop => "loop",
                RouteType::OutAndBack => "out-and-back",
                RouteType::PointToPoint => "point-to-point",
                RouteType::Unknown => "unknown",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_labels_are_case_insensitive() {
        assert_eq!(Difficulty::from_label("EASY"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label(" Moderate "), Difficulty::Moderate);
        assert_eq!(Difficulty::from_label("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("Strenuous"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("• Easy"), Difficulty::Easy);
    }

    #[test]
    fn difficulty_unknown_labels() {
        assert_eq!(Difficulty::from_label(""), Difficulty::Unknown);
        assert_eq!(Difficulty::from_label("extreme"), Difficulty::Unknown);
        assert_eq!(Difficulty::from_label("4.5"), Difficulty::Unknown);
    }

    #[test]
    fn difficulty_mapping_is_idempotent() {
        for d in [
            Difficulty::Easy,
            Difficulty::Moderate,
            Difficulty::Hard,
            Difficulty::Unknown,
        ] {
            assert_eq!(Difficulty::from_label(&d.to_string()), d);
        }
    }

    #[test]
    fn route_type_label_variants() {
        assert_eq!(RouteType::from_label("Out & back"), RouteType::OutAndBack);
        assert_eq!(RouteType::from_label("out and back"), RouteType::OutAndBack);
        assert_eq!(RouteType::from_label("Point to point"), RouteType::PointToPoint);
        assert_eq!(RouteType::from_label("LOOP"), RouteType::Loop);
        assert_eq!(RouteType::from_label("lollipop"), RouteType::Unknown);
    }

    #[test]
    fn route_type_mapping_is_idempotent() {
        for r in [
            RouteType::Loop,
            RouteType::OutAndBack,
            RouteType::PointToPoint,
            RouteType::Unknown,
        ] {
            assert_eq!(RouteType::from_label(&r.to_string()), r);
        }
    }

    #[test]
    fn enums_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_value(RouteType::OutAndBack).unwrap(),
            "out-and-back"
        );
        assert_eq!(serde_json::to_value(Difficulty::Unknown).unwrap(), "unknown");
    }

    #[test]
    fn detail_flattens_summary_fields() {
        let detail = TrailDetail {
            summary: TrailSummary {
                name: Some("Alum Cave Trail".into()),
                ..TrailSummary::default()
            },
            ..TrailDetail::default()
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "Alum Cave Trail");
        assert!(json["rating"].is_null());
        assert_eq!(json["description"], "");
        assert!(json.get("summary").is_none());
    }
}

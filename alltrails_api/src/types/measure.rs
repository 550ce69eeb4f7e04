//! Unit-tagged measurements.
//!
//! Values keep the unit the site printed. Nothing is converted, so compare
//! units before doing arithmetic across records.

use serde::{Deserialize, Serialize};

/// A numeric value paired with its unit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Measure<U> {
    pub value: f64,
    pub unit: U,
}

/// Trail length unit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "km")]
    Kilometers,
}

/// Elevation unit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationUnit {
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "m")]
    Meters,
}

pub type Distance = Measure<DistanceUnit>;
pub type Elevation = Measure<ElevationUnit>;

impl DistanceUnit {
    /// Maps a unit token such as `mi`, `miles` or `KM`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().trim_end_matches('.').to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Some(Self::Miles),
            "km" | "kms" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Some(Self::Kilometers)
            }
            _ => None,
        }
    }
}

impl ElevationUnit {
    /// Maps a unit token such as `ft`, `feet` or `m`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().trim_end_matches('.').to_lowercase().as_str() {
            "ft" | "foot" | "feet" => Some(Self::Feet),
            "m" | "meter" | "meters" | "metre" | "metres" => Some(Self::Meters),
            _ => None,
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DistanceUnit::Miles => "mi",
                DistanceUnit::Kilometers => "km",
            }
        )
    }
}

impl std::fmt::Display for ElevationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ElevationUnit::Feet => "ft",
                ElevationUnit::Meters => "m",
            }
        )
    }
}

impl<U: std::fmt::Display> std::fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Geometry kind of a map-data element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
            ElementKind::Other => "element",
        }
    }
}

/// Free-text OSM tags attached to a facility
pub type Tags = HashMap<String, String>;

/// Unprocessed facility returned by the area search
#[derive(Debug, Clone, PartialEq)]
pub struct RawFacility {
    pub id: u64,
    pub kind: ElementKind,
    pub coordinate: Coordinate,
    pub tags: Tags,
}

impl RawFacility {
    /// Look up a tag, treating blank values as absent
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Category a resource is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    #[serde(rename = "Food")]
    Food,
    #[serde(rename = "Housing & Shelter")]
    HousingAndShelter,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Community Center")]
    CommunityCenter,
    #[serde(rename = "Social Services")]
    SocialServices,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 5] = [
        ResourceCategory::Food,
        ResourceCategory::HousingAndShelter,
        ResourceCategory::Healthcare,
        ResourceCategory::CommunityCenter,
        ResourceCategory::SocialServices,
    ];

    /// Human-readable label, as shown in the directory
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Food => "Food",
            ResourceCategory::HousingAndShelter => "Housing & Shelter",
            ResourceCategory::Healthcare => "Healthcare",
            ResourceCategory::CommunityCenter => "Community Center",
            ResourceCategory::SocialServices => "Social Services",
        }
    }

    /// URL-friendly identifier
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceCategory::Food => "food",
            ResourceCategory::HousingAndShelter => "housing",
            ResourceCategory::Healthcare => "healthcare",
            ResourceCategory::CommunityCenter => "community-center",
            ResourceCategory::SocialServices => "social-services",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ResourceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ResourceCategory::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Normalized, ranked aid resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub category: ResourceCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    pub coordinate: Coordinate,
    #[serde(rename = "distanceMiles")]
    pub distance_miles: f64,
}

/// Nationwide resource that is not tied to a location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NationalResource {
    pub name: &'static str,
    pub category: ResourceCategory,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'static str>,
    pub website: &'static str,
}

/// Default search radius in miles
pub const DEFAULT_RADIUS_MILES: f64 = 20.0;

/// Validated parameters for a single local search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    zipcode: String,
    radius_miles: f64,
}

impl SearchQuery {
    /// Build a query, trimming the zipcode.
    ///
    /// Returns `None` for a blank zipcode or a radius that is not a positive finite number.
    pub fn new(zipcode: &str, radius_miles: f64) -> Option<Self> {
        let zipcode = zipcode.trim();
        if zipcode.is_empty() || !radius_miles.is_finite() || radius_miles <= 0.0 {
            return None;
        }
        Some(Self {
            zipcode: zipcode.to_string(),
            radius_miles,
        })
    }

    pub fn with_default_radius(zipcode: &str) -> Option<Self> {
        Self::new(zipcode, DEFAULT_RADIUS_MILES)
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&ResourceCategory::HousingAndShelter).unwrap();
        assert_eq!(json, "\"Housing & Shelter\"");
    }

    #[test]
    fn test_category_from_slug_or_label() {
        assert_eq!("food".parse::<ResourceCategory>().unwrap(), ResourceCategory::Food);
        assert_eq!(
            "Community Center".parse::<ResourceCategory>().unwrap(),
            ResourceCategory::CommunityCenter
        );
        assert_eq!(
            "SOCIAL-SERVICES".parse::<ResourceCategory>().unwrap(),
            ResourceCategory::SocialServices
        );
        let err = "pharmacy".parse::<ResourceCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("pharmacy".to_string()));
        assert_eq!(err.to_string(), "unknown resource category: pharmacy");
    }

    #[test]
    fn test_search_query_trims_and_validates() {
        let query = SearchQuery::new("  94110 ", 5.0).unwrap();
        assert_eq!(query.zipcode(), "94110");
        assert_eq!(query.radius_miles(), 5.0);

        assert!(SearchQuery::new("   ", 5.0).is_none());
        assert!(SearchQuery::new("94110", 0.0).is_none());
        assert!(SearchQuery::new("94110", f64::NAN).is_none());
    }

    #[test]
    fn test_default_radius() {
        let query = SearchQuery::with_default_radius("10001").unwrap();
        assert_eq!(query.radius_miles(), 20.0);
    }

    #[test]
    fn test_blank_tag_is_absent() {
        let mut tags = Tags::new();
        tags.insert("name".to_string(), "   ".to_string());
        let facility = RawFacility {
            id: 1,
            kind: ElementKind::Node,
            coordinate: Coordinate::new(0.0, 0.0),
            tags,
        };
        assert_eq!(facility.tag("name"), None);
    }
}

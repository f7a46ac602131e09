use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::core::distance::miles_to_meters;
use crate::models::{Coordinate, ElementKind, RawFacility, Tags};
use crate::services::http::{HttpRequest, HttpTransport, TransportError};

/// Amenity values requested from the map-data service
pub const FACILITY_AMENITIES: &[&str] = &["social_facility", "food_bank", "shelter", "community_centre"];

/// Errors that can occur when querying the map-data service
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Area query service returned HTTP {0}")]
    ApiError(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// Direct position for points, service-computed centroid for areas
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => self.center.map(|c| Coordinate::new(c.lat, c.lon)),
        }
    }

    pub fn into_raw_facility(self) -> Option<RawFacility> {
        let coordinate = self.coordinate()?;
        Some(RawFacility {
            id: self.id,
            kind: self.kind,
            coordinate,
            tags: self.tags,
        })
    }
}

/// Radius search against an Overpass API endpoint
pub struct AreaSearch {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    user_agent: String,
    query_timeout_secs: u32,
    result_limit: u32,
}

impl AreaSearch {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        endpoint: String,
        user_agent: String,
        query_timeout_secs: u32,
        result_limit: u32,
    ) -> Self {
        Self {
            transport,
            endpoint,
            user_agent,
            query_timeout_secs,
            result_limit,
        }
    }

    /// Build the Overpass QL query for facilities within `radius_miles` of `origin`
    pub fn build_query(&self, origin: &Coordinate, radius_miles: f64) -> String {
        let around = format!(
            "around:{:.1},{},{}",
            miles_to_meters(radius_miles),
            origin.latitude,
            origin.longitude
        );
        // Overpass regexes match substrings, so anchor to exact values
        let amenity = format!("[\"amenity\"~\"^({})$\"]", FACILITY_AMENITIES.join("|"));

        format!(
            "[out:json][timeout:{timeout}];\n(\n  node{amenity}({around});\n  way{amenity}({around});\n);\nout center {limit};",
            timeout = self.query_timeout_secs,
            amenity = amenity,
            around = around,
            limit = self.result_limit,
        )
    }

    /// Run the radius query and return facilities in service order.
    ///
    /// Elements without any usable position are skipped.
    pub async fn search(&self, origin: &Coordinate, radius_miles: f64) -> Result<Vec<RawFacility>, OverpassError> {
        let query = self.build_query(origin, radius_miles);
        let body = format!("data={}", urlencoding::encode(&query));

        let request = HttpRequest::post(self.endpoint.as_str(), body)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("User-Agent", self.user_agent.as_str());

        tracing::debug!(
            "Querying {} for facilities within {} miles of ({}, {})",
            self.endpoint,
            radius_miles,
            origin.latitude,
            origin.longitude
        );

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            tracing::warn!("Area query failed with HTTP {}", response.status);
            return Err(OverpassError::ApiError(response.status));
        }

        let parsed: OverpassResponse = serde_json::from_str(&response.body)
            .map_err(|e| OverpassError::InvalidResponse(format!("Failed to parse elements: {}", e)))?;

        let total = parsed.elements.len();
        let facilities: Vec<RawFacility> = parsed
            .elements
            .into_iter()
            .filter_map(|element| {
                let id = element.id;
                let facility = element.into_raw_facility();
                if facility.is_none() {
                    tracing::debug!("Skipping element {} without coordinates", id);
                }
                facility
            })
            .collect();

        tracing::debug!("Area query returned {} elements ({} usable)", total, facilities.len());

        Ok(facilities)
    }
}

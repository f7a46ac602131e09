use serde::{Deserialize, Serialize};
use crate::models::domain::{Coordinate, NationalResource, Resource};

/// Response for the local resource search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResourcesResponse {
    pub zipcode: String,
    #[serde(rename = "radiusMiles")]
    pub radius_miles: f64,
    pub origin: Coordinate,
    pub resources: Vec<Resource>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the national directory endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NationalResourcesResponse {
    pub resources: Vec<NationalResource>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

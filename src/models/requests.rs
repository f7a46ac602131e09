use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search for resources near a zipcode
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchResourcesRequest {
    #[validate(length(min = 1, max = 10))]
    pub zipcode: String,
    #[serde(default, alias = "radius_miles", rename = "radiusMiles")]
    #[validate(range(exclusive_min = 0.0))]
    pub radius_miles: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Request for the national directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NationalResourcesRequest {
    #[serde(default)]
    pub category: Option<String>,
}

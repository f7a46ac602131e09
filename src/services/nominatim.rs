use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::models::Coordinate;
use crate::services::http::{HttpRequest, HttpTransport, TransportError};

/// Errors that can occur when geocoding a postal code
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Geocoding service returned HTTP {0}")]
    ApiError(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// One candidate in a Nominatim search response
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Nominatim postal-code geocoder
pub struct Geocoder {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    user_agent: String,
    country_code: String,
}

impl Geocoder {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        endpoint: String,
        user_agent: String,
        country_code: String,
    ) -> Self {
        Self {
            transport,
            endpoint,
            user_agent,
            country_code,
        }
    }

    /// Resolve a postal code to the top-ranked coordinate.
    ///
    /// `Ok(None)` means the service answered but knows no such code.
    pub async fn geocode_zipcode(&self, zipcode: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let request = HttpRequest::get(self.endpoint.as_str())
            .query("postalcode", zipcode)
            .query("countrycodes", self.country_code.as_str())
            .query("format", "json")
            .query("limit", "1")
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", "application/json");

        tracing::debug!("Geocoding zipcode {} via {}", zipcode, self.endpoint);

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            tracing::warn!("Geocoding {} failed with HTTP {}", zipcode, response.status);
            return Err(GeocodeError::ApiError(response.status));
        }

        let places: Vec<NominatimPlace> = serde_json::from_str(&response.body)
            .map_err(|e| GeocodeError::InvalidResponse(format!("Failed to parse places: {}", e)))?;

        let Some(place) = places.first() else {
            tracing::info!("No geocoding match for zipcode {}", zipcode);
            return Ok(None);
        };

        let coordinate = parse_coordinate(place)?;
        tracing::debug!(
            "Zipcode {} resolved to ({}, {})",
            zipcode,
            coordinate.latitude,
            coordinate.longitude
        );

        Ok(Some(coordinate))
    }
}

fn parse_coordinate(place: &NominatimPlace) -> Result<Coordinate, GeocodeError> {
    let latitude = place
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidResponse(format!("Bad latitude: {}", place.lat)))?;
    let longitude = place
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidResponse(format!("Bad longitude: {}", place.lon)))?;

    Ok(Coordinate::new(latitude, longitude))
}

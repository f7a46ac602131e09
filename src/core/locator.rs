use std::sync::Arc;
use thiserror::Error;

use crate::config::Settings;
use crate::core::ranking::rank_resources;
use crate::core::session::SearchToken;
use crate::models::{Coordinate, Resource, SearchQuery};
use crate::services::{AreaSearch, GeocodeError, Geocoder, HttpTransport, OverpassError};

pub const ZIPCODE_NOT_FOUND_MESSAGE: &str =
    "We couldn't find that zipcode. Please double-check it and try again.";

/// Errors that end a local resource search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search: {0}")]
    InvalidQuery(String),

    #[error("Geocoding unavailable: {0}")]
    GeocoderUnavailable(#[from] GeocodeError),

    #[error("Area search unavailable: {0}")]
    AreaSearchUnavailable(#[from] OverpassError),

    #[error("Search superseded by a newer request")]
    Cancelled,
}

impl SearchError {
    /// Message suitable for showing to the person searching
    pub fn user_message(&self) -> String {
        match self {
            SearchError::InvalidQuery(reason) => reason.clone(),
            SearchError::GeocoderUnavailable(_) => {
                "We couldn't reach the zipcode lookup service. Please try again in a moment.".to_string()
            }
            SearchError::AreaSearchUnavailable(_) => {
                "We couldn't reach the local resource directory. Please try again in a moment.".to_string()
            }
            SearchError::Cancelled => "This search was replaced by a newer one.".to_string(),
        }
    }
}

/// Result of a search that reached the services
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The zipcode did not resolve to any location
    ZipcodeNotFound,
    /// Resources around the resolved origin, nearest first (possibly empty)
    Found {
        origin: Coordinate,
        resources: Vec<Resource>,
    },
}

/// Geocode -> area search -> rank pipeline
pub struct ResourceLocator {
    geocoder: Geocoder,
    area_search: AreaSearch,
}

impl ResourceLocator {
    pub fn new(geocoder: Geocoder, area_search: AreaSearch) -> Self {
        Self {
            geocoder,
            area_search,
        }
    }

    /// Wire both services to one transport using configured endpoints
    pub fn from_settings(settings: &Settings, transport: Arc<dyn HttpTransport>) -> Self {
        let geocoder = Geocoder::new(
            Arc::clone(&transport),
            settings.geocoder.endpoint.clone(),
            settings.http.user_agent.clone(),
            settings.geocoder.country_code.clone(),
        );
        let area_search = AreaSearch::new(
            transport,
            settings.overpass.endpoint.clone(),
            settings.http.user_agent.clone(),
            settings.overpass.query_timeout_secs,
            settings.overpass.result_limit,
        );

        Self::new(geocoder, area_search)
    }

    /// Run the full pipeline for one query.
    ///
    /// The area search only starts once geocoding has produced an origin,
    /// and never starts if `token` was superseded in the meantime.
    pub async fn locate(&self, query: &SearchQuery, token: &SearchToken) -> Result<SearchOutcome, SearchError> {
        tracing::info!(
            "Searching resources within {} miles of {}",
            query.radius_miles(),
            query.zipcode()
        );

        let origin = match self.geocoder.geocode_zipcode(query.zipcode()).await? {
            Some(origin) => origin,
            None => return Ok(SearchOutcome::ZipcodeNotFound),
        };

        if token.is_cancelled() {
            tracing::debug!("Search for {} superseded after geocoding", query.zipcode());
            return Err(SearchError::Cancelled);
        }

        let facilities = self.area_search.search(&origin, query.radius_miles()).await?;

        if token.is_cancelled() {
            tracing::debug!("Search for {} superseded after area search", query.zipcode());
            return Err(SearchError::Cancelled);
        }

        let resources = rank_resources(&origin, &facilities);

        tracing::info!(
            "Found {} resources near {} ({} raw facilities)",
            resources.len(),
            query.zipcode(),
            facilities.len()
        );

        Ok(SearchOutcome::Found { origin, resources })
    }
}

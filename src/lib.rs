//! Aidboard Resources - local and national aid resource lookup
//!
//! Resolves a US zipcode to a coordinate, queries OpenStreetMap data for
//! nearby aid facilities and returns them categorized and sorted by distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::haversine_miles, ResourceLocator, SearchError, SearchOutcome, SearchSession,
    SearchState, SearchToken,
};
pub use models::{Coordinate, RawFacility, Resource, ResourceCategory, SearchQuery};
pub use services::{HttpTransport, ReqwestTransport};

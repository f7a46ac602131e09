// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinate, ElementKind, NationalResource, RawFacility, Resource, ResourceCategory,
    SearchQuery, Tags, UnknownCategory, DEFAULT_RADIUS_MILES,
};
pub use requests::{NationalResourcesRequest, SearchResourcesRequest};
pub use responses::{ErrorResponse, HealthResponse, NationalResourcesResponse, SearchResourcesResponse};

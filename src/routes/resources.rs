use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::SearchSettings;
use crate::core::{
    directory::national_resources,
    locator::{ResourceLocator, SearchError, SearchOutcome, ZIPCODE_NOT_FOUND_MESSAGE},
    ranking::filter_by_category,
    session::SearchToken,
};
use crate::models::{
    ErrorResponse, HealthResponse, NationalResourcesRequest, NationalResourcesResponse,
    ResourceCategory, SearchQuery, SearchResourcesRequest, SearchResourcesResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub locator: Arc<ResourceLocator>,
    pub search: SearchSettings,
}

/// Configure all resource-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/resources/search", web::get().to(search_resources))
        .route("/resources/national", web::get().to(list_national_resources));
}

fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

fn parse_category(raw: Option<&str>) -> Result<Option<ResourceCategory>, HttpResponse> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<ResourceCategory>()
            .map(Some)
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, "Invalid category", e.to_string())),
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Local resource search endpoint
///
/// GET /api/v1/resources/search?zipcode=94110&radiusMiles=20&category=food
async fn search_resources(
    state: web::Data<AppState>,
    req: web::Query<SearchResourcesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for resource search: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let category = match parse_category(req.category.as_deref()) {
        Ok(category) => category,
        Err(response) => return response,
    };

    let radius_miles = req.radius_miles.unwrap_or(state.search.default_radius_miles);
    if radius_miles > state.search.max_radius_miles {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            format!("radiusMiles must be at most {}", state.search.max_radius_miles),
        );
    }

    let Some(query) = SearchQuery::new(&req.zipcode, radius_miles) else {
        let err = SearchError::InvalidQuery("Please enter a zipcode and a positive radius.".to_string());
        return error_response(StatusCode::BAD_REQUEST, "Invalid search", err.user_message());
    };

    // Each request is independent; there is nothing to supersede it
    let token = SearchToken::detached();

    match state.locator.locate(&query, &token).await {
        Ok(SearchOutcome::Found { origin, resources }) => {
            let resources = filter_by_category(resources, category);
            HttpResponse::Ok().json(SearchResourcesResponse {
                zipcode: query.zipcode().to_string(),
                radius_miles: query.radius_miles(),
                origin,
                total_results: resources.len(),
                resources,
            })
        }
        Ok(SearchOutcome::ZipcodeNotFound) => error_response(
            StatusCode::NOT_FOUND,
            "Zipcode not found",
            ZIPCODE_NOT_FOUND_MESSAGE.to_string(),
        ),
        Err(e) => {
            tracing::error!("Resource search for {} failed: {}", query.zipcode(), e);
            error_response(
                StatusCode::BAD_GATEWAY,
                "Upstream service unavailable",
                e.user_message(),
            )
        }
    }
}

/// National directory endpoint
///
/// GET /api/v1/resources/national?category=healthcare
async fn list_national_resources(query: web::Query<NationalResourcesRequest>) -> impl Responder {
    let category = match parse_category(query.category.as_deref()) {
        Ok(category) => category,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(NationalResourcesResponse {
        resources: national_resources(category),
    })
}

use std::cmp::Ordering;

use crate::core::{categorize::classify, distance::distance_between};
use crate::models::{Coordinate, RawFacility, Resource, ResourceCategory};

/// Sort key used for resources whose distance could not be computed
const UNKNOWN_DISTANCE_SORT_KEY: f64 = 99.0;

/// Compose a postal address from `addr:*` tags.
///
/// House number and street form the first line; city and state follow,
/// comma separated. Returns `None` when no fragment is present.
pub fn compose_address(facility: &RawFacility) -> Option<String> {
    let street_line = [facility.tag("addr:housenumber"), facility.tag("addr:street")]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let parts: Vec<&str> = [
        Some(street_line.as_str()).filter(|s| !s.is_empty()),
        facility.tag("addr:city"),
        facility.tag("addr:state"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Turn one raw facility into a resource. Nameless facilities yield `None`.
pub fn normalize_facility(origin: &Coordinate, facility: &RawFacility) -> Option<Resource> {
    let name = facility.tag("name")?;

    Some(Resource {
        id: format!("{}/{}", facility.kind.as_str(), facility.id),
        name: name.to_string(),
        category: classify(facility),
        address: compose_address(facility),
        phone: facility
            .tag("phone")
            .or_else(|| facility.tag("contact:phone"))
            .map(str::to_string),
        website: facility
            .tag("website")
            .or_else(|| facility.tag("contact:website"))
            .map(str::to_string),
        hours: facility.tag("opening_hours").map(str::to_string),
        coordinate: facility.coordinate,
        distance_miles: distance_between(origin, &facility.coordinate),
    })
}

fn sort_key(resource: &Resource) -> f64 {
    if resource.distance_miles.is_finite() {
        resource.distance_miles
    } else {
        UNKNOWN_DISTANCE_SORT_KEY
    }
}

/// Normalize and rank facilities around `origin`.
///
/// Drops nameless records, classifies the rest and sorts ascending by
/// distance. The input is never modified.
pub fn rank_resources(origin: &Coordinate, facilities: &[RawFacility]) -> Vec<Resource> {
    let mut resources: Vec<Resource> = facilities
        .iter()
        .filter_map(|facility| normalize_facility(origin, facility))
        .collect();

    sort_by_distance(&mut resources);

    tracing::debug!(
        "Ranked {} resources from {} raw facilities",
        resources.len(),
        facilities.len()
    );

    resources
}

/// Stable ascending sort by distance
pub fn sort_by_distance(resources: &mut [Resource]) {
    resources.sort_by(|a, b| {
        sort_key(a)
            .partial_cmp(&sort_key(b))
            .unwrap_or(Ordering::Equal)
    });
}

/// Keep only resources in `category`; `None` keeps everything
pub fn filter_by_category(resources: Vec<Resource>, category: Option<ResourceCategory>) -> Vec<Resource> {
    match category {
        Some(category) => resources.into_iter().filter(|r| r.category == category).collect(),
        None => resources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementKind, Tags};

    fn facility(id: u64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> RawFacility {
        RawFacility {
            id,
            kind: ElementKind::Node,
            coordinate: Coordinate::new(lat, lon),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Tags>(),
        }
    }

    #[test]
    fn test_address_street_only() {
        let f = facility(1, 0.0, 0.0, &[("addr:housenumber", "12"), ("addr:street", "Main St")]);
        assert_eq!(compose_address(&f).as_deref(), Some("12 Main St"));
    }

    #[test]
    fn test_address_full() {
        let f = facility(
            1,
            0.0,
            0.0,
            &[
                ("addr:housenumber", "3200"),
                ("addr:street", "Mission St"),
                ("addr:city", "San Francisco"),
                ("addr:state", "CA"),
            ],
        );
        assert_eq!(compose_address(&f).as_deref(), Some("3200 Mission St, San Francisco, CA"));
    }

    #[test]
    fn test_address_city_only() {
        let f = facility(1, 0.0, 0.0, &[("addr:city", "Oakland")]);
        assert_eq!(compose_address(&f).as_deref(), Some("Oakland"));
    }

    #[test]
    fn test_address_absent() {
        let f = facility(1, 0.0, 0.0, &[("name", "Pantry")]);
        assert_eq!(compose_address(&f), None);
    }

    #[test]
    fn test_normalize_copies_contact_fields() {
        let origin = Coordinate::new(37.75, -122.41);
        let f = facility(
            42,
            37.76,
            -122.42,
            &[
                ("name", "Mission Pantry"),
                ("amenity", "food_bank"),
                ("contact:phone", "+1 415 555 0100"),
                ("website", "https://pantry.example.org"),
                ("opening_hours", "Mo-Fr 09:00-17:00"),
            ],
        );

        let resource = normalize_facility(&origin, &f).unwrap();
        assert_eq!(resource.id, "node/42");
        assert_eq!(resource.category, ResourceCategory::Food);
        assert_eq!(resource.phone.as_deref(), Some("+1 415 555 0100"));
        assert_eq!(resource.website.as_deref(), Some("https://pantry.example.org"));
        assert_eq!(resource.hours.as_deref(), Some("Mo-Fr 09:00-17:00"));
        assert!(resource.distance_miles > 0.0);
    }

    #[test]
    fn test_rank_drops_nameless_and_sorts() {
        let origin = Coordinate::new(37.75, -122.41);
        let facilities = vec![
            facility(1, 37.90, -122.41, &[("name", "Far")]),
            facility(2, 37.76, -122.41, &[("amenity", "food_bank")]),
            facility(3, 37.751, -122.41, &[("name", "Near")]),
        ];

        let ranked = rank_resources(&origin, &facilities);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Far"]);
    }

    #[test]
    fn test_unknown_distance_sorts_after_close_results() {
        let origin = Coordinate::new(0.0, 0.0);
        let mut resources = rank_resources(
            &origin,
            &[
                facility(1, 0.0, 0.01, &[("name", "Close")]),
                facility(2, 0.0, 5.0, &[("name", "Very far")]),
            ],
        );
        resources[0].distance_miles = f64::NAN;

        sort_by_distance(&mut resources);
        // NaN orders as 99 miles, still ahead of the ~345 mile entry
        assert_eq!(resources[0].name, "Close");
        assert!(resources[0].distance_miles.is_nan());

        resources[1].distance_miles = 1.0;
        sort_by_distance(&mut resources);
        assert_eq!(resources[0].name, "Very far");
    }

    #[test]
    fn test_filter_by_category() {
        let origin = Coordinate::new(0.0, 0.0);
        let ranked = rank_resources(
            &origin,
            &[
                facility(1, 0.0, 0.01, &[("name", "Pantry"), ("amenity", "food_bank")]),
                facility(2, 0.0, 0.02, &[("name", "Hall"), ("amenity", "community_centre")]),
            ],
        );

        let food = filter_by_category(ranked.clone(), Some(ResourceCategory::Food));
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].name, "Pantry");
        assert_eq!(filter_by_category(ranked, None).len(), 2);
    }
}

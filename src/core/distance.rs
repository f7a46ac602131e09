use crate::models::Coordinate;

/// Earth's mean radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.34;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Great-circle distance in miles
#[inline]
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Haversine distance between two coordinates in miles
#[inline]
pub fn distance_between(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_miles(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Convert a radius in miles to meters
#[inline]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // San Francisco to Los Angeles is roughly 347 miles
        let distance = haversine_miles(37.7749, -122.4194, 34.0522, -118.2437);
        assert!((distance - 347.0).abs() < 5.0, "Distance should be ~347mi, got {}", distance);
    }

    #[test]
    fn test_coincident_points() {
        assert_eq!(haversine_miles(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
    }

    #[test]
    fn test_quarter_meridian() {
        // Equator to pole is a quarter of the circumference
        let distance = haversine_miles(0.0, 0.0, 90.0, 0.0);
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_MILES;
        assert!((distance - expected).abs() < 1e-6);
    }

    #[test]
    fn test_miles_to_meters() {
        assert!((miles_to_meters(20.0) - 32186.8).abs() < 1e-6);
        assert!((miles_to_meters(5.0) - 8046.7).abs() < 1e-6);
    }
}

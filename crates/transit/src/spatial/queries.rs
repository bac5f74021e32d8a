//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Convert degrees to approximate meters at equator (for bounding box queries)
pub fn degrees_to_meters_approx(degrees: f64) -> f64 {
    degrees * 111_320.0 // meters per degree at equator
}

/// Convert meters to degrees at equator (for bounding box queries)
pub fn meters_to_degrees_approx(meters: f64) -> f64 {
    meters / 111_320.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_distance() {
        // Uttara to Motijheel is roughly 16 km straight-line
        let uttara = Point::new(90.3984, 23.8728);
        let motijheel = Point::new(90.4172, 23.7330);

        let dist = haversine_distance(uttara, motijheel);
        assert!((dist - 15_600.0).abs() < 1_000.0); // within a kilometer
    }

    #[test]
    fn test_zero_distance() {
        let p = Point::new(90.3871, 23.7561);
        assert_relative_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_degree_meter_round_trip() {
        assert_relative_eq!(
            meters_to_degrees_approx(degrees_to_meters_approx(0.5)),
            0.5
        );
    }
}

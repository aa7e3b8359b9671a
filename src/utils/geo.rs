//! Great-circle distance
//!
//! Haversine distance on a sphere of radius 6371 km. Distances are straight
//! lines over the globe, not road distances.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside ±90 / ±180
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Haversine distance between two points in km
///
/// Non-finite input propagates as NaN; callers reject it beforehand.
pub fn distance_km(p1: &Coordinate, p2: &Coordinate) -> f64 {
    let d_lat = (p2.lat - p1.lat).to_radians();
    let d_lng = (p2.lng - p1.lng).to_radians();
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distances derived from the three trip locations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDistances {
    /// House to workplace, one way
    pub commute_km: f64,
    /// House to holiday destination, one way
    pub holiday_km: f64,
    /// commute + holiday
    pub total_km: f64,
}

impl TripDistances {
    pub fn from_locations(house: &Coordinate, workplace: &Coordinate, holiday: &Coordinate) -> Self {
        let commute_km = distance_km(house, workplace);
        let holiday_km = distance_km(house, holiday);
        Self {
            commute_km,
            holiday_km,
            total_km: commute_km + holiday_km,
        }
    }
}

//! TERRAIN SUB-SCORE
//!
//! Trip shape decides how much each driving surface matters:
//! - Short commutes (< 30 km) are mostly city driving, longer ones highway
//! - A holiday destination beyond 200 km raises the off-road weight
//!
//! The weight vector is computed once per call and shared by all candidates.

use crate::data::Vehicle;
use crate::utils::TripDistances;
use serde::{Deserialize, Serialize};

pub const CITY_COMMUTE_LIMIT_KM: f64 = 30.0;
pub const LONG_HOLIDAY_KM: f64 = 200.0;

const DOMINANT_WEIGHT: f64 = 0.7;
const MINOR_WEIGHT: f64 = 0.3;
const OFFROAD_LONG_TRIP: f64 = 0.4;
const OFFROAD_SHORT_TRIP: f64 = 0.2;

/// Applied terrain weights, reported back in the result metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainWeights {
    pub city: f64,
    pub highway: f64,
    pub offroad: f64,
}

impl TerrainWeights {
    pub fn from_trip(trip: &TripDistances) -> Self {
        let city_commute = trip.commute_km < CITY_COMMUTE_LIMIT_KM;
        Self {
            city: if city_commute { DOMINANT_WEIGHT } else { MINOR_WEIGHT },
            highway: if city_commute { MINOR_WEIGHT } else { DOMINANT_WEIGHT },
            offroad: if trip.holiday_km > LONG_HOLIDAY_KM {
                OFFROAD_LONG_TRIP
            } else {
                OFFROAD_SHORT_TRIP
            },
        }
    }
}

/// Calculate terrain sub-score as the weighted sum of terrain ratings
pub fn calculate_terrain_score(vehicle: &Vehicle, weights: &TerrainWeights) -> f64 {
    weights.city * vehicle.terrain.city as f64
        + weights.highway * vehicle.terrain.highway as f64
        + weights.offroad * vehicle.terrain.offroad as f64
}

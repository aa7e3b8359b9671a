//! EFFICIENCY SUB-SCORE
//!
//! Electric efficiency (km/kWh) and combustion/hybrid efficiency (km/L) live
//! on different scales, so each is normalised against its own typical ceiling.
//! Efficiency counts double when the daily commute dominates the trip profile.

use crate::data::Vehicle;
use crate::utils::TripDistances;

/// Typical best-case electric efficiency, km/kWh
pub const ELECTRIC_CEILING_KM_PER_KWH: f64 = 7.0;
/// Typical best-case combustion/hybrid efficiency, km/L
pub const FUEL_CEILING_KM_PER_L: f64 = 25.0;

const COMMUTE_EMPHASIS: f64 = 3.0;
const TRIP_EMPHASIS: f64 = 1.5;

/// Multiplier on the efficiency sub-score: 3 when commute > holiday, else 1.5
pub fn efficiency_emphasis(trip: &TripDistances) -> f64 {
    if trip.commute_km > trip.holiday_km {
        COMMUTE_EMPHASIS
    } else {
        TRIP_EMPHASIS
    }
}

/// Calculate efficiency sub-score
///
/// Not capped: the emphasis multiplier can push it past 10.
pub fn calculate_efficiency_score(vehicle: &Vehicle, emphasis: f64) -> f64 {
    let ceiling = if vehicle.is_electric() {
        ELECTRIC_CEILING_KM_PER_KWH
    } else {
        FUEL_CEILING_KM_PER_L
    };
    vehicle.efficiency / ceiling * 10.0 * emphasis
}

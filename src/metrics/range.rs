//! RANGE SUB-SCORE
//!
//! Rewards vehicles whose range comfortably covers the trip. Saturates at 10
//! once the range reaches 120% of the total trip distance.

use crate::data::Vehicle;
use crate::utils::TripDistances;

/// Range must exceed the total trip by this factor to score full marks
pub const RANGE_BUFFER: f64 = 1.2;

/// Calculate range sub-score (0-10)
///
/// A zero-length trip needs no range, so the ratio saturates instead of
/// dividing by zero.
pub fn calculate_range_score(vehicle: &Vehicle, trip: &TripDistances) -> f64 {
    let required_km = trip.total_km * RANGE_BUFFER;
    if required_km <= 0.0 {
        return 10.0;
    }
    (vehicle.range_km as f64 / required_km).min(1.0) * 10.0
}

/// Carbon Rating Utilities
///
/// Maps a vehicle's type and efficiency to an ordinal 1 (worst) to 5 (best)
/// environmental rating, and the rating back to display text.
///
/// # Rating Scale
/// - Electric = 5
/// - Hybrid = 3, or 4 above 18 km/L
/// - SUV / minivan = 2 above 12 km/L, else 1
/// - Sedan / compact = 2 above 14 km/L, else 1

use crate::data::{Vehicle, VehicleType};

pub const HYBRID_BONUS_KM_PER_L: f64 = 18.0;
pub const LARGE_VEHICLE_THRESHOLD_KM_PER_L: f64 = 12.0;
pub const CAR_THRESHOLD_KM_PER_L: f64 = 14.0;

/// Rate a vehicle's carbon impact from its type and efficiency
pub fn carbon_rating(vehicle: &Vehicle) -> u8 {
    let efficiency = vehicle.efficiency;
    match vehicle.vehicle_type {
        VehicleType::Electric => 5,
        VehicleType::Hybrid => {
            if efficiency > HYBRID_BONUS_KM_PER_L {
                4
            } else {
                3
            }
        }
        VehicleType::Suv | VehicleType::Minivan => {
            if efficiency > LARGE_VEHICLE_THRESHOLD_KM_PER_L {
                2
            } else {
                1
            }
        }
        VehicleType::Sedan | VehicleType::Compact => {
            if efficiency > CAR_THRESHOLD_KM_PER_L {
                2
            } else {
                1
            }
        }
    }
}

/// Convert a carbon rating to its display description
pub fn carbon_rating_label(rating: u8) -> &'static str {
    match rating {
        5 => "Excellent (Near Zero Emissions)",
        4 => "Very Good (Low Carbon Footprint)",
        3 => "Good (Moderate Environmental Impact)",
        2 => "Fair (Higher Carbon Emissions)",
        1 => "Poor (High Carbon Footprint)",
        _ => "Unknown",
    }
}

//! Catalog Filter
//!
//! Applies the hard constraints (minimum seats, optional type) before any
//! scoring happens. Catalog order is preserved.

use crate::data::{Vehicle, VehicleCatalog};
use crate::error::RecommendError;
use crate::input::TypePreference;

/// Narrow the catalog to vehicles meeting the seat requirement and type filter
///
/// Fails with `NoVehiclesForType` when a specific type leaves nothing, and with
/// `NoVehiclesMeetingSeats` when the seat requirement alone leaves nothing.
pub fn filter_candidates(
    catalog: &VehicleCatalog,
    min_seats: u32,
    preference: TypePreference,
) -> Result<Vec<&Vehicle>, RecommendError> {
    let candidates: Vec<&Vehicle> = catalog
        .vehicles()
        .iter()
        .filter(|v| v.seats >= min_seats)
        .filter(|v| match preference {
            TypePreference::Any => true,
            TypePreference::Only(t) => v.vehicle_type == t,
        })
        .collect();

    if candidates.is_empty() {
        return Err(match preference {
            TypePreference::Only(t) => RecommendError::NoVehiclesForType {
                vehicle_type: t.to_string(),
                min_seats,
            },
            TypePreference::Any => RecommendError::NoVehiclesMeetingSeats { min_seats },
        });
    }

    Ok(candidates)
}

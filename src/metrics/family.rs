//! FAMILY SUB-SCORE
//!
//! Uses the catalog's 1-10 family-friendliness rating directly when the
//! household has children.

use crate::data::Vehicle;
use crate::input::Habits;

/// Calculate family sub-score; exactly 0 without children
pub fn calculate_family_score(vehicle: &Vehicle, habits: &Habits) -> f64 {
    if habits.has_kids {
        vehicle.family_friendly as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VehicleCatalog;

    #[test]
    fn test_family_rating_passthrough() {
        let catalog = VehicleCatalog::builtin();
        let odyssey = catalog.get("Honda Odyssey").unwrap();

        let kids = Habits { has_kids: true, trunk_preference: false };
        assert_eq!(calculate_family_score(odyssey, &kids), 10.0);
        assert_eq!(calculate_family_score(odyssey, &Habits::default()), 0.0);
    }
}

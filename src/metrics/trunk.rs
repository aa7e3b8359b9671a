//! TRUNK SUB-SCORE
//!
//! Only active when the user asked for cargo space. 1000 litres maps to 10.

use crate::data::Vehicle;
use crate::input::Habits;

pub const TRUNK_REFERENCE_LITERS: f64 = 1000.0;

/// Calculate trunk sub-score; exactly 0 when trunk space was not requested
pub fn calculate_trunk_score(vehicle: &Vehicle, habits: &Habits) -> f64 {
    if !habits.trunk_preference {
        return 0.0;
    }
    vehicle.trunk_liters as f64 / TRUNK_REFERENCE_LITERS * 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VehicleCatalog;
    use approx::assert_relative_eq;

    #[test]
    fn test_gated_by_preference() {
        let catalog = VehicleCatalog::builtin();
        let carnival = catalog.get("Kia Carnival").unwrap();

        let off = Habits { has_kids: false, trunk_preference: false };
        assert_eq!(calculate_trunk_score(carnival, &off), 0.0);

        let on = Habits { has_kids: false, trunk_preference: true };
        // 1041 L can exceed 10
        assert_relative_eq!(calculate_trunk_score(carnival, &on), 10.41, epsilon = 1e-9);
    }
}

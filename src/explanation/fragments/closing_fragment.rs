use crate::data::Vehicle;
use crate::input::Habits;

/// Monthly commute cost of the primary (two decimals)
pub fn generate_cost_fragment(primary: &Vehicle, monthly_commute_cost: f64) -> String {
    format!(
        "Your estimated monthly commute cost with the {} would be ${:.2}.",
        primary.name, monthly_commute_cost
    )
}

/// Acknowledge active preferences; `None` when neither applies
pub fn generate_preferences_fragment(habits: &Habits) -> Option<String> {
    match (habits.has_kids, habits.trunk_preference) {
        (true, true) => Some(
            "This recommendation accounts for your family needs and prioritizes vehicles with larger cargo capacity."
                .to_string(),
        ),
        (true, false) => Some("This recommendation accounts for your family needs.".to_string()),
        (false, true) => Some(
            "This recommendation prioritizes vehicles with larger cargo capacity.".to_string(),
        ),
        (false, false) => None,
    }
}

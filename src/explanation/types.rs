use crate::data::{Vehicle, VehicleType};
use crate::metrics::Factor;
use serde::{Deserialize, Serialize};

/// One sub-score category and its value, as cited in the summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub score: f64,
}

/// Why the runner-up is worth a look, first matching condition wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "vehicleType", rename_all = "snake_case")]
pub enum ComparisonReason {
    MoreAffordable,
    DifferentPowertrain(VehicleType),
    MoreCargoSpace,
    MoreSeats,
    BetterEfficiency,
    SolidAlternative,
}

impl ComparisonReason {
    /// Compare the runner-up against the primary
    ///
    /// Order: price, type, trunk, seats, efficiency.
    pub fn between(primary: &Vehicle, runner_up: &Vehicle) -> Self {
        if runner_up.price < primary.price {
            ComparisonReason::MoreAffordable
        } else if runner_up.vehicle_type != primary.vehicle_type {
            ComparisonReason::DifferentPowertrain(runner_up.vehicle_type)
        } else if runner_up.trunk_liters > primary.trunk_liters {
            ComparisonReason::MoreCargoSpace
        } else if runner_up.seats > primary.seats {
            ComparisonReason::MoreSeats
        } else if runner_up.efficiency > primary.efficiency {
            ComparisonReason::BetterEfficiency
        } else {
            ComparisonReason::SolidAlternative
        }
    }

    pub fn phrase(&self) -> String {
        match self {
            ComparisonReason::MoreAffordable => "is more affordable".to_string(),
            ComparisonReason::DifferentPowertrain(t) => {
                format!("offers a different powertrain option ({})", t)
            }
            ComparisonReason::MoreCargoSpace => "provides more cargo space".to_string(),
            ComparisonReason::MoreSeats => "offers more seating capacity".to_string(),
            ComparisonReason::BetterEfficiency => "has better fuel efficiency".to_string(),
            ComparisonReason::SolidAlternative => "is a solid alternative".to_string(),
        }
    }
}

/// Generated natural-language summary with the facts it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sentences in output order
    pub sentences: Vec<String>,
    /// The two highest sub-scores of the primary, best first
    pub top_factors: Vec<FactorContribution>,
    /// Absent when the runner-up is the primary itself
    pub runner_up_reason: Option<ComparisonReason>,
}

impl Summary {
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

//! Sub-score modules for vehicle scoring
//!
//! Each sub-score lives in its own module. Every sub-score targets roughly
//! 0-10 before weighting; optional ones are exactly 0 when their preference
//! is switched off.

pub mod range;
pub mod trunk;
pub mod family;
pub mod terrain;
pub mod efficiency;

// Re-export metric functions
pub use range::{calculate_range_score, RANGE_BUFFER};
pub use trunk::calculate_trunk_score;
pub use family::calculate_family_score;
pub use terrain::{calculate_terrain_score, TerrainWeights};
pub use efficiency::{calculate_efficiency_score, efficiency_emphasis};

use crate::input::Habits;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RANGE_WEIGHT: f64 = 3.0;
pub const TRUNK_WEIGHT: f64 = 2.0;
pub const FAMILY_WEIGHT: f64 = 2.0;
pub const TERRAIN_WEIGHT: f64 = 2.0;
pub const EFFICIENCY_WEIGHT: f64 = 1.0;

/// Scoring category
///
/// Declaration order is the tie-break order when two sub-scores are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Range,
    Trunk,
    Family,
    Terrain,
    Efficiency,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Range,
        Factor::Trunk,
        Factor::Family,
        Factor::Terrain,
        Factor::Efficiency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Range => "range",
            Factor::Trunk => "trunk",
            Factor::Family => "family",
            Factor::Terrain => "terrain",
            Factor::Efficiency => "efficiency",
        }
    }

    /// Weight of this factor in the total; gated factors weigh 0 when inactive
    pub fn weight(&self, habits: &Habits) -> f64 {
        match self {
            Factor::Range => RANGE_WEIGHT,
            Factor::Trunk if habits.trunk_preference => TRUNK_WEIGHT,
            Factor::Trunk => 0.0,
            Factor::Family if habits.has_kids => FAMILY_WEIGHT,
            Factor::Family => 0.0,
            Factor::Terrain => TERRAIN_WEIGHT,
            Factor::Efficiency => EFFICIENCY_WEIGHT,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of active weights (normalisation divisor)
pub fn total_weight(habits: &Habits) -> f64 {
    Factor::ALL.iter().map(|f| f.weight(habits)).sum()
}

/// Unweighted sub-scores of one vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub range: f64,
    pub trunk: f64,
    pub family: f64,
    pub terrain: f64,
    pub efficiency: f64,
}

impl SubScores {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Range => self.range,
            Factor::Trunk => self.trunk,
            Factor::Family => self.family,
            Factor::Terrain => self.terrain,
            Factor::Efficiency => self.efficiency,
        }
    }

    /// (factor, value) pairs in declaration order
    pub fn entries(&self) -> [(Factor, f64); 5] {
        Factor::ALL.map(|f| (f, self.get(f)))
    }

    /// Weighted sum of all sub-scores
    pub fn weighted_sum(&self, habits: &Habits) -> f64 {
        self.entries()
            .iter()
            .map(|(factor, value)| value * factor.weight(habits))
            .sum()
    }
}

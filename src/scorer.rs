//! Vehicle Scorer - per-call scoring of filtered candidates
//!
//! Combines the five sub-scores into a weighted sum and divides by the sum of
//! active weights, so the result stays on a 0-10-ish scale whichever optional
//! preferences are switched on.

use crate::data::Vehicle;
use crate::input::Habits;
use crate::metrics::*;
use crate::utils::TripDistances;
use serde::Serialize;

/// Scoring state shared by all candidates of one call
#[derive(Debug, Clone, Copy)]
pub struct VehicleScorer {
    trip: TripDistances,
    habits: Habits,
    terrain_weights: TerrainWeights,
    efficiency_emphasis: f64,
    total_weight: f64,
}

/// A candidate with its score breakdown
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate<'c> {
    pub vehicle: &'c Vehicle,
    pub normalized_score: f64,
    pub sub_scores: SubScores,
}

impl VehicleScorer {
    pub fn new(trip: TripDistances, habits: Habits) -> Self {
        Self {
            trip,
            habits,
            terrain_weights: TerrainWeights::from_trip(&trip),
            efficiency_emphasis: efficiency_emphasis(&trip),
            total_weight: total_weight(&habits),
        }
    }

    pub fn terrain_weights(&self) -> TerrainWeights {
        self.terrain_weights
    }

    /// Compute the unweighted sub-scores of one vehicle
    pub fn sub_scores(&self, vehicle: &Vehicle) -> SubScores {
        SubScores {
            range: calculate_range_score(vehicle, &self.trip),
            trunk: calculate_trunk_score(vehicle, &self.habits),
            family: calculate_family_score(vehicle, &self.habits),
            terrain: calculate_terrain_score(vehicle, &self.terrain_weights),
            efficiency: calculate_efficiency_score(vehicle, self.efficiency_emphasis),
        }
    }

    /// Score a single vehicle
    pub fn score<'c>(&self, vehicle: &'c Vehicle) -> ScoredCandidate<'c> {
        let sub_scores = self.sub_scores(vehicle);
        let normalized_score = sub_scores.weighted_sum(&self.habits) / self.total_weight;

        ScoredCandidate {
            vehicle,
            normalized_score,
            sub_scores,
        }
    }

    /// Score every candidate, preserving input order
    pub fn score_all<'c>(&self, candidates: &[&'c Vehicle]) -> Vec<ScoredCandidate<'c>> {
        candidates.iter().map(|&v| self.score(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VehicleCatalog;
    use approx::assert_relative_eq;

    fn trip(commute_km: f64, holiday_km: f64) -> TripDistances {
        TripDistances { commute_km, holiday_km, total_km: commute_km + holiday_km }
    }

    #[test]
    fn test_model3_score_by_hand() {
        let catalog = VehicleCatalog::builtin();
        let model3 = catalog.get("Tesla Model 3").unwrap();
        let scorer = VehicleScorer::new(trip(13.6, 559.2), Habits::default());

        let scored = scorer.score(model3);
        // range: 576 / (572.8 * 1.2) * 10
        let range = 576.0 / (572.8 * 1.2) * 10.0;
        // terrain: city weights 0.7/0.3, long holiday offroad 0.4
        let terrain = 0.7 * 9.0 + 0.3 * 10.0 + 0.4 * 3.0;
        // efficiency: holiday dominates -> 1.5
        let efficiency = 6.9 / 7.0 * 10.0 * 1.5;

        assert_relative_eq!(scored.sub_scores.range, range, epsilon = 1e-9);
        assert_relative_eq!(scored.sub_scores.terrain, terrain, epsilon = 1e-9);
        assert_relative_eq!(scored.sub_scores.efficiency, efficiency, epsilon = 1e-9);
        assert_eq!(scored.sub_scores.trunk, 0.0);
        assert_eq!(scored.sub_scores.family, 0.0);
        assert_relative_eq!(
            scored.normalized_score,
            (range * 3.0 + terrain * 2.0 + efficiency) / 6.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_all_preferences_active() {
        let catalog = VehicleCatalog::builtin();
        let sienna = catalog.get("Toyota Sienna").unwrap();
        let habits = Habits { has_kids: true, trunk_preference: true };
        let scorer = VehicleScorer::new(trip(40.0, 20.0), habits);

        let s = scorer.score(sienna).sub_scores;
        assert_relative_eq!(s.trunk, 9.49, epsilon = 1e-9);
        assert_eq!(s.family, 10.0);

        let expected = (s.range * 3.0 + s.trunk * 2.0 + s.family * 2.0 + s.terrain * 2.0 + s.efficiency) / 10.0;
        assert_relative_eq!(scorer.score(sienna).normalized_score, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_scores_finite_and_non_negative() {
        let catalog = VehicleCatalog::builtin();
        let all: Vec<&Vehicle> = catalog.vehicles().iter().collect();
        let trips = [trip(0.0, 0.0), trip(5.0, 3000.0), trip(120.0, 15.0)];
        let habit_sets = [
            Habits::default(),
            Habits { has_kids: true, trunk_preference: false },
            Habits { has_kids: false, trunk_preference: true },
            Habits { has_kids: true, trunk_preference: true },
        ];

        for t in trips {
            for habits in habit_sets {
                for scored in VehicleScorer::new(t, habits).score_all(&all) {
                    assert!(scored.normalized_score.is_finite());
                    assert!(scored.normalized_score >= 0.0);
                    if !habits.trunk_preference {
                        assert_eq!(scored.sub_scores.trunk, 0.0);
                    }
                    if !habits.has_kids {
                        assert_eq!(scored.sub_scores.family, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_all_preserves_order() {
        let catalog = VehicleCatalog::builtin();
        let some: Vec<&Vehicle> = catalog.vehicles().iter().rev().take(4).collect();
        let scored = VehicleScorer::new(trip(10.0, 10.0), Habits::default()).score_all(&some);
        let names: Vec<&str> = scored.iter().map(|s| s.vehicle.name.as_str()).collect();
        let expected: Vec<&str> = some.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, expected);
    }
}

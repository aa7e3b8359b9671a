//! Primary / runner-up selection
//!
//! Candidates are ranked by normalized score (descending). Ties keep the
//! order the candidates arrived in, which is catalog order.
//!
//! The runner-up is resolved by an ordered chain of strategies, each tried
//! only when the previous one found nothing:
//! 1. Next-best filtered candidate with a different name
//! 2. Best vehicle of a different type from the whole catalog that still meets
//!    the seat requirement (ignores the type filter)
//! 3. First catalog vehicle with a different name
//! 4. The primary itself (single-entry catalog)

use crate::data::{Vehicle, VehicleCatalog};
use crate::input::Habits;
use crate::scorer::ScoredCandidate;
use serde::{Deserialize, Serialize};

/// Seat surplus stops counting beyond 1.5x the requirement
pub const SEAT_RATIO_CAP: f64 = 1.5;
pub const ALTERNATIVE_TRUNK_REFERENCE_LITERS: f64 = 800.0;

/// Which step of the fallback chain produced the runner-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerUpSource {
    NextBestCandidate,
    AlternativeType,
    CatalogFallback,
    SameAsPrimary,
}

/// Inputs every runner-up strategy may look at
pub struct RunnerUpContext<'r, 'c> {
    pub ranked: &'r [ScoredCandidate<'c>],
    pub catalog: &'c VehicleCatalog,
    pub primary: &'c Vehicle,
    pub min_seats: u32,
    pub habits: Habits,
}

type RunnerUpStrategy = for<'r, 'c> fn(&RunnerUpContext<'r, 'c>) -> Option<&'c Vehicle>;

const RUNNER_UP_CHAIN: [(RunnerUpSource, RunnerUpStrategy); 3] = [
    (RunnerUpSource::NextBestCandidate, next_best_candidate),
    (RunnerUpSource::AlternativeType, best_alternative_type),
    (RunnerUpSource::CatalogFallback, first_other_vehicle),
];

/// Outcome of selection
#[derive(Debug, Clone)]
pub struct Selection<'c> {
    /// Candidates sorted by score, best first
    pub ranked: Vec<ScoredCandidate<'c>>,
    pub runner_up: &'c Vehicle,
    pub runner_up_source: RunnerUpSource,
}

impl<'c> Selection<'c> {
    pub fn primary(&self) -> &ScoredCandidate<'c> {
        &self.ranked[0]
    }
}

/// Sort candidates by normalized score, best first (stable)
pub fn rank_candidates(mut candidates: Vec<ScoredCandidate<'_>>) -> Vec<ScoredCandidate<'_>> {
    candidates.sort_by(|a, b| b.normalized_score.total_cmp(&a.normalized_score));
    candidates
}

/// Rank candidates and resolve primary and runner-up
///
/// Returns `None` only when `candidates` is empty.
pub fn select<'c>(
    candidates: Vec<ScoredCandidate<'c>>,
    catalog: &'c VehicleCatalog,
    min_seats: u32,
    habits: Habits,
) -> Option<Selection<'c>> {
    let ranked = rank_candidates(candidates);
    let primary = ranked.first()?.vehicle;

    let ctx = RunnerUpContext {
        ranked: &ranked,
        catalog,
        primary,
        min_seats,
        habits,
    };
    let (runner_up, runner_up_source) = resolve_runner_up(&ctx);

    Some(Selection {
        ranked,
        runner_up,
        runner_up_source,
    })
}

/// Walk the fallback chain; falls back to the primary itself
pub fn resolve_runner_up<'c>(ctx: &RunnerUpContext<'_, 'c>) -> (&'c Vehicle, RunnerUpSource) {
    RUNNER_UP_CHAIN
        .iter()
        .find_map(|(source, strategy)| strategy(ctx).map(|v| (v, *source)))
        .unwrap_or((ctx.primary, RunnerUpSource::SameAsPrimary))
}

/// Step 1: highest-ranked candidate whose name differs from the primary
pub fn next_best_candidate<'c>(ctx: &RunnerUpContext<'_, 'c>) -> Option<&'c Vehicle> {
    ctx.ranked
        .iter()
        .map(|c| c.vehicle)
        .find(|v| v.name != ctx.primary.name)
}

/// Step 2: best different-type vehicle from the whole catalog
///
/// Uses the lightweight [`alternative_score`]; ties keep catalog order.
pub fn best_alternative_type<'c>(ctx: &RunnerUpContext<'_, 'c>) -> Option<&'c Vehicle> {
    let mut best: Option<(&'c Vehicle, f64)> = None;

    for vehicle in ctx.catalog.vehicles() {
        if vehicle.seats < ctx.min_seats || vehicle.vehicle_type == ctx.primary.vehicle_type {
            continue;
        }
        let score = alternative_score(vehicle, ctx.min_seats, &ctx.habits);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((vehicle, score));
        }
    }

    best.map(|(v, _)| v)
}

/// Step 3: first catalog vehicle whose name differs from the primary
pub fn first_other_vehicle<'c>(ctx: &RunnerUpContext<'_, 'c>) -> Option<&'c Vehicle> {
    ctx.catalog
        .vehicles()
        .iter()
        .find(|v| v.name != ctx.primary.name)
}

/// Secondary score for step 2
///
/// Average of seat fit, trunk (if requested) and family rating (if kids),
/// each on a 0-5-ish scale.
pub fn alternative_score(vehicle: &Vehicle, min_seats: u32, habits: &Habits) -> f64 {
    let seat_score = (vehicle.seats as f64 / min_seats.max(1) as f64).min(SEAT_RATIO_CAP) * 5.0;
    let trunk_score = if habits.trunk_preference {
        vehicle.trunk_liters as f64 / ALTERNATIVE_TRUNK_REFERENCE_LITERS * 5.0
    } else {
        0.0
    };
    let family_score = if habits.has_kids {
        vehicle.family_friendly as f64 / 10.0 * 5.0
    } else {
        0.0
    };

    (seat_score + trunk_score + family_score) / 3.0
}

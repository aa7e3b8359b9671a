//! Recommendation engine entry point
//!
//! A `Recommender` borrows a catalog and runs one stateless pipeline per call:
//! validate, measure the trip, filter, score, select, cost, summarise.
//! Nothing is cached between calls, so one instance can serve many threads.

use crate::config::EngineConfig;
use crate::cost::CostEstimate;
use crate::data::{Vehicle, VehicleCatalog};
use crate::error::RecommendError;
use crate::explanation::{FactorContribution, SummaryContext, SummaryGenerator};
use crate::filter::filter_candidates;
use crate::input::RecommendationInput;
use crate::metrics::TerrainWeights;
use crate::scorer::VehicleScorer;
use crate::selector::{select, RunnerUpSource};
use crate::utils::{carbon_rating, carbon_rating_label, TripDistances};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-slot value pair (primary and runner-up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPair<T> {
    pub primary: T,
    pub runner_up: T,
}

/// Trip figures the scores were derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripMetrics {
    #[serde(rename = "commuteDistance_km")]
    pub commute_distance_km: f64,
    #[serde(rename = "holidayDistance_km")]
    pub holiday_distance_km: f64,
    #[serde(rename = "totalDistance_km")]
    pub total_distance_km: f64,
    pub terrain: TerrainWeights,
}

/// Outcome of one recommendation call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub primary: Vehicle,
    pub runner_up: Vehicle,
    pub summary: String,
    /// Monthly commute + one holiday round trip, per slot
    pub price_breakdown: SlotPair<f64>,
    /// Rating of the primary, 1-5
    pub carbon_rating: u8,
    pub carbon_label: String,
    pub runner_up_source: RunnerUpSource,
    pub cost_details: SlotPair<CostEstimate>,
    pub top_factors: Vec<FactorContribution>,
    pub metrics: TripMetrics,
}

/// Vehicle recommendation engine bound to one catalog
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'c> {
    catalog: &'c VehicleCatalog,
    config: EngineConfig,
}

impl<'c> Recommender<'c> {
    pub fn new(catalog: &'c VehicleCatalog) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: &'c VehicleCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'c VehicleCatalog {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommend a primary vehicle and a runner-up
    ///
    /// Either returns a complete result or the first error hit; the catalog
    /// and the input are never modified.
    pub fn recommend(
        &self,
        input: &RecommendationInput,
    ) -> Result<RecommendationResult, RecommendError> {
        let validated = input.validate()?;
        let trip = TripDistances::from_locations(
            &validated.house,
            &validated.workplace,
            &validated.holiday,
        );
        tracing::debug!(
            "Trip: commute {:.1} km, holiday {:.1} km, total {:.1} km",
            trip.commute_km,
            trip.holiday_km,
            trip.total_km
        );

        let candidates = filter_candidates(self.catalog, validated.min_seats, validated.preference)?;
        tracing::debug!(
            "{} of {} vehicles pass the filter (min seats {}, type {:?})",
            candidates.len(),
            self.catalog.len(),
            validated.min_seats,
            validated.preference.vehicle_type()
        );

        let scorer = VehicleScorer::new(trip, validated.habits);
        let scored = scorer.score_all(&candidates);

        // filter_candidates never returns an empty list
        let selection = select(scored, self.catalog, validated.min_seats, validated.habits)
            .ok_or(RecommendError::NoVehiclesMeetingSeats {
                min_seats: validated.min_seats,
            })?;

        let primary = selection.primary();
        let runner_up = selection.runner_up;
        if selection.runner_up_source != RunnerUpSource::NextBestCandidate {
            tracing::warn!(
                "Runner-up {} came from {:?} (only {} candidate(s))",
                runner_up.name,
                selection.runner_up_source,
                selection.ranked.len()
            );
        }

        let cost_model = &self.config.cost;
        let primary_cost = cost_model.estimate(primary.vehicle, &trip);
        let runner_up_cost = cost_model.estimate(runner_up, &trip);

        let summary = SummaryGenerator::generate(&SummaryContext {
            trip: &trip,
            primary,
            runner_up,
            primary_monthly_commute_cost: primary_cost.monthly_commute,
            habits: &validated.habits,
        });

        let rating = carbon_rating(primary.vehicle);
        tracing::debug!(
            "Selected {} ({:.3}) with runner-up {}",
            primary.vehicle.name,
            primary.normalized_score,
            runner_up.name
        );

        Ok(RecommendationResult {
            primary: primary.vehicle.clone(),
            runner_up: runner_up.clone(),
            summary: summary.text(),
            price_breakdown: SlotPair {
                primary: primary_cost.total,
                runner_up: runner_up_cost.total,
            },
            carbon_rating: rating,
            carbon_label: carbon_rating_label(rating).to_string(),
            runner_up_source: selection.runner_up_source,
            cost_details: SlotPair {
                primary: primary_cost,
                runner_up: runner_up_cost,
            },
            top_factors: summary.top_factors,
            metrics: TripMetrics {
                commute_distance_km: trip.commute_km,
                holiday_distance_km: trip.holiday_km,
                total_distance_km: trip.total_km,
                terrain: scorer.terrain_weights(),
            },
        })
    }

    /// Run independent requests in parallel; output order matches input order
    pub fn recommend_batch(
        &self,
        inputs: &[RecommendationInput],
    ) -> Vec<Result<RecommendationResult, RecommendError>> {
        inputs.par_iter().map(|input| self.recommend(input)).collect()
    }
}

/// One-shot recommendation with the default configuration
pub fn recommend(
    catalog: &VehicleCatalog,
    input: &RecommendationInput,
) -> Result<RecommendationResult, RecommendError> {
    Recommender::new(catalog).recommend(input)
}

use crate::data::Vehicle;
use crate::explanation::fragments::*;
use crate::explanation::types::Summary;
use crate::input::Habits;
use crate::scorer::ScoredCandidate;
use crate::utils::TripDistances;

/// Everything the summary sentences are built from
pub struct SummaryContext<'a, 'c> {
    pub trip: &'a TripDistances,
    pub primary: &'a ScoredCandidate<'c>,
    pub runner_up: &'c Vehicle,
    pub primary_monthly_commute_cost: f64,
    pub habits: &'a Habits,
}

/// Summary generator
pub struct SummaryGenerator;

impl SummaryGenerator {
    /// Assemble the summary from its fragments
    ///
    /// Sentence order: trip, primary, runner-up (skipped when it is the
    /// primary itself), cost, preferences (skipped when none is active).
    pub fn generate(ctx: &SummaryContext<'_, '_>) -> Summary {
        let top = top_factors(&ctx.primary.sub_scores);
        let mut sentences = Vec::with_capacity(5);

        sentences.push(generate_trip_fragment(ctx.trip));
        sentences.push(generate_primary_fragment(ctx.primary.vehicle, &top));

        let runner_up_reason =
            generate_runner_up_fragment(ctx.primary.vehicle, ctx.runner_up).map(|(sentence, reason)| {
                sentences.push(sentence);
                reason
            });

        sentences.push(generate_cost_fragment(
            ctx.primary.vehicle,
            ctx.primary_monthly_commute_cost,
        ));

        if let Some(sentence) = generate_preferences_fragment(ctx.habits) {
            sentences.push(sentence);
        }

        Summary {
            sentences,
            top_factors: top.into_vec(),
            runner_up_reason,
        }
    }
}

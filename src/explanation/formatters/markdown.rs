use crate::cost::CostEstimate;
use crate::data::Vehicle;
use crate::recommender::RecommendationResult;
use std::fmt::Write;

/// Markdown formatter for recommendation results
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format result as markdown
    pub fn format(result: &RecommendationResult) -> String {
        let mut md = String::with_capacity(2048);

        let _ = writeln!(md, "# Recommended: {}\n", result.primary.name);
        let _ = writeln!(md, "{}\n", result.summary);
        let _ = writeln!(
            md,
            "**Carbon Rating:** {}/5 - {}\n",
            result.carbon_rating, result.carbon_label
        );

        let _ = writeln!(md, "## Primary Choice\n");
        Self::format_vehicle(&mut md, &result.primary, &result.cost_details.primary);

        if result.runner_up.name != result.primary.name {
            let _ = writeln!(md, "## Runner-up\n");
            Self::format_vehicle(&mut md, &result.runner_up, &result.cost_details.runner_up);
        }

        // Why the primary won
        if !result.top_factors.is_empty() {
            let _ = writeln!(md, "## Top Factors\n");
            for contribution in &result.top_factors {
                let _ = writeln!(md, "- **{}**: {:.2}", contribution.factor, contribution.score);
            }
            let _ = writeln!(md);
        }

        let m = &result.metrics;
        let _ = writeln!(md, "## Trip Profile\n");
        let _ = writeln!(md, "| Metric | Value |");
        let _ = writeln!(md, "|--------|-------|");
        let _ = writeln!(md, "| Daily commute | {:.1} km |", m.commute_distance_km);
        let _ = writeln!(md, "| Holiday trip | {:.1} km |", m.holiday_distance_km);
        let _ = writeln!(md, "| Total | {:.1} km |", m.total_distance_km);
        let _ = writeln!(
            md,
            "| Terrain weights | city {:.1} / highway {:.1} / off-road {:.1} |",
            m.terrain.city, m.terrain.highway, m.terrain.offroad
        );
        let _ = writeln!(md);

        md
    }

    fn format_vehicle(md: &mut String, vehicle: &Vehicle, cost: &CostEstimate) {
        let _ = writeln!(md, "### {} ({})\n", vehicle.name, vehicle.vehicle_type);
        let _ = writeln!(md, "| Spec | Value |");
        let _ = writeln!(md, "|------|-------|");
        let _ = writeln!(md, "| Price | {} |", format_price(vehicle.price));
        let _ = writeln!(md, "| Range | {} km |", vehicle.range_km);
        let _ = writeln!(md, "| Seats | {} |", vehicle.seats);
        let _ = writeln!(md, "| Trunk | {} liters |", vehicle.trunk_liters);
        let _ = writeln!(
            md,
            "| Efficiency | {} {} |",
            vehicle.efficiency,
            vehicle.efficiency_unit()
        );
        let _ = writeln!(md, "| Family rating | {}/10 |", vehicle.family_friendly);
        let _ = writeln!(md, "| Monthly commute cost | ${:.2} |", cost.monthly_commute);
        let _ = writeln!(md, "| Holiday trip cost | ${:.2} |", cost.holiday_trip);
        let _ = writeln!(md, "| Total | ${:.2} |", cost.total);
        let _ = writeln!(md);
    }
}

/// Catalog price is in thousands: 42 -> "$42,000"
fn format_price(thousands: u32) -> String {
    let dollars = thousands as u64 * 1000;
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

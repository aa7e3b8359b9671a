use crate::data::Vehicle;
use crate::explanation::types::FactorContribution;
use crate::metrics::{Factor, SubScores};
use smallvec::SmallVec;

/// The two highest sub-scores, best first
///
/// The sort is stable, so equal values keep the order range, trunk, family,
/// terrain, efficiency.
pub fn top_factors(sub_scores: &SubScores) -> SmallVec<[FactorContribution; 2]> {
    let mut entries: SmallVec<[(Factor, f64); 5]> = SmallVec::from_buf(sub_scores.entries());
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    entries
        .into_iter()
        .take(2)
        .map(|(factor, score)| FactorContribution { factor, score })
        .collect()
}

/// Main reason, phrased as the first clause after "because"
fn lead_phrase(factor: Factor, vehicle: &Vehicle) -> String {
    match factor {
        Factor::Range => format!(
            "it offers excellent range ({} km) for your needs",
            vehicle.range_km
        ),
        Factor::Trunk => format!(
            "it has spacious trunk capacity ({} liters) as you requested",
            vehicle.trunk_liters
        ),
        Factor::Family => {
            "it's highly family-friendly with excellent child-safety features".to_string()
        }
        Factor::Terrain => {
            "it performs well on your specific mix of city, highway and occasional off-road driving"
                .to_string()
        }
        Factor::Efficiency => format!(
            "it offers excellent fuel efficiency ({} {})",
            vehicle.efficiency,
            vehicle.efficiency_unit()
        ),
    }
}

/// Supporting reason, phrased to follow "and"
fn supporting_phrase(factor: Factor, vehicle: &Vehicle) -> String {
    match factor {
        Factor::Range => format!(
            "provides sufficient range ({} km) for your trips",
            vehicle.range_km
        ),
        Factor::Trunk => format!("offers good cargo space ({} liters)", vehicle.trunk_liters),
        Factor::Family => "is well-suited for families with children".to_string(),
        Factor::Terrain => "handles your typical driving conditions well".to_string(),
        Factor::Efficiency => format!(
            "is cost-effective to operate with good {} efficiency",
            if vehicle.is_electric() { "energy" } else { "fuel" }
        ),
    }
}

/// Sentence naming the primary vehicle and its top factors
pub fn generate_primary_fragment(vehicle: &Vehicle, top: &[FactorContribution]) -> String {
    let mut sentence = format!("We recommend the {} as your primary option", vehicle.name);

    if let Some(first) = top.first() {
        sentence.push_str(" because ");
        sentence.push_str(&lead_phrase(first.factor, vehicle));
    }
    if let Some(second) = top.get(1) {
        sentence.push_str(" and ");
        sentence.push_str(&supporting_phrase(second.factor, vehicle));
    }

    sentence.push('.');
    sentence
}

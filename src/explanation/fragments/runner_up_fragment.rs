use crate::data::Vehicle;
use crate::explanation::types::ComparisonReason;

/// Sentence introducing the runner-up, or `None` when it is the primary itself
pub fn generate_runner_up_fragment(
    primary: &Vehicle,
    runner_up: &Vehicle,
) -> Option<(String, ComparisonReason)> {
    if primary.name == runner_up.name {
        return None;
    }

    let reason = ComparisonReason::between(primary, runner_up);
    let sentence = format!(
        "As a runner-up, we suggest the {}, which {}.",
        runner_up.name,
        reason.phrase()
    );
    Some((sentence, reason))
}

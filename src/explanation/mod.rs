pub mod types;
pub mod fragments;
pub mod generator;
pub mod formatters;

pub use types::{ComparisonReason, FactorContribution, Summary};

pub use fragments::{
    generate_cost_fragment, generate_preferences_fragment, generate_primary_fragment,
    generate_runner_up_fragment, generate_trip_fragment, top_factors,
};

pub use generator::{SummaryContext, SummaryGenerator};
pub use formatters::{JsonFormatter, MarkdownFormatter};

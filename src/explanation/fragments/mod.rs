pub mod trip_fragment;
pub mod primary_fragment;
pub mod runner_up_fragment;
pub mod closing_fragment;

pub use trip_fragment::generate_trip_fragment;
pub use primary_fragment::{generate_primary_fragment, top_factors};
pub use runner_up_fragment::generate_runner_up_fragment;
pub use closing_fragment::{generate_cost_fragment, generate_preferences_fragment};

//! Vehicle Recommender
//!
//! Recommends a primary vehicle and a runner-up from a fixed catalog, given
//! three trip locations (house, workplace, holiday destination), a minimum
//! seat count, two household habits and an optional vehicle-type filter.
//!
//! Pipeline per call:
//! - `input/`: validation of the caller's request
//! - `utils/`: Haversine trip distances, carbon rating
//! - `filter`: hard constraints (seats, type)
//! - `metrics/`: five sub-scores (range, trunk, family, terrain, efficiency)
//! - `scorer`: weighted, normalized total
//! - `selector`: primary and runner-up fallback chain
//! - `cost`: operating cost estimates
//! - `explanation/`: summary text, JSON and Markdown formatters
//!
//! The engine is deterministic and holds no state between calls.

pub mod utils;
pub mod data;
pub mod metrics;
pub mod error;
pub mod input;
pub mod filter;
pub mod scorer;
pub mod selector;
pub mod cost;
pub mod config;
pub mod explanation;
pub mod recommender;

// Re-export commonly used types
pub use config::EngineConfig;
pub use cost::{CostEstimate, CostModel};
pub use data::{TerrainRatings, Vehicle, VehicleCatalog, VehicleType};
pub use error::RecommendError;
pub use explanation::{JsonFormatter, MarkdownFormatter};
pub use input::{Habits, RecommendationInput, TypePreference};
pub use recommender::{recommend, RecommendationResult, Recommender};
pub use selector::RunnerUpSource;
pub use utils::{Coordinate, TripDistances};

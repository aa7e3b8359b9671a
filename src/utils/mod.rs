//! Utility modules for vehicle recommendation
//!
//! Contains shared functionality used across the engine:
//! - Geo: Haversine distances between trip locations
//! - Carbon rating: Type/efficiency to 1-5 rating

pub mod geo;
pub mod carbon_rating;

// Re-export commonly used types
pub use geo::{distance_km, Coordinate, TripDistances, EARTH_RADIUS_KM};
pub use carbon_rating::{carbon_rating, carbon_rating_label};

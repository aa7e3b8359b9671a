//! Recommendation errors
//!
//! Every variant is terminal for the call: the engine performs no local
//! recovery and never returns a partial result. Messages are user-facing and
//! are meant to be displayed verbatim by the caller.

use thiserror::Error;

/// Failure modes of a single recommendation call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// House, workplace or holiday location was not supplied
    #[error("Not enough location data to provide a recommendation.")]
    MissingLocation,

    /// A coordinate was non-finite or outside the valid lat/lng range
    #[error("Invalid location coordinates")]
    InvalidCoordinate,

    /// `minSeats` must be a positive integer
    #[error("Minimum seat requirement must be at least 1.")]
    InvalidSeatCount,

    /// A type filter combined with the seat requirement left no candidates
    ///
    /// Also raised for a type name no vehicle can have.
    #[error("No {vehicle_type} vehicles found that meet your minimum seating requirement of {min_seats}. Try adjusting your preferences.")]
    NoVehiclesForType { vehicle_type: String, min_seats: u32 },

    /// The seat requirement alone left no candidates
    #[error("No vehicles found with your minimum seat requirement.")]
    NoVehiclesMeetingSeats { min_seats: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_names_type_and_seats() {
        let err = RecommendError::NoVehiclesForType {
            vehicle_type: "suv".to_string(),
            min_seats: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("suv"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_missing_location_message() {
        assert_eq!(
            RecommendError::MissingLocation.to_string(),
            "Not enough location data to provide a recommendation."
        );
    }
}

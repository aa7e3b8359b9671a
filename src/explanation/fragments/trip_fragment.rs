use crate::utils::TripDistances;

/// Opening sentence with the three trip distances (one decimal)
pub fn generate_trip_fragment(trip: &TripDistances) -> String {
    format!(
        "Based on your input, your daily commute is {:.1} km, and your holiday trip is {:.1} km, totaling {:.1} km.",
        trip.commute_km, trip.holiday_km, trip.total_km
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_fragment() {
        let trip = TripDistances { commute_km: 13.597, holiday_km: 559.17, total_km: 572.767 };
        assert_eq!(
            generate_trip_fragment(&trip),
            "Based on your input, your daily commute is 13.6 km, and your holiday trip is 559.2 km, totaling 572.8 km."
        );
    }
}

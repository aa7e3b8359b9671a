//! Recommendation Integration Tests
//!
//! Runs the full pipeline (validation through summary) against the built-in
//! catalog and small fixture catalogs.

use approx::assert_relative_eq;
use vehicle_recommender::scorer::VehicleScorer;
use vehicle_recommender::{
    recommend, Coordinate, Habits, RecommendError, RecommendationInput, Recommender,
    RunnerUpSource, TerrainRatings, TripDistances, Vehicle, VehicleCatalog, VehicleType,
};

const HOUSE: Coordinate = Coordinate { lat: 37.77, lng: -122.42 };
const WORKPLACE: Coordinate = Coordinate { lat: 37.80, lng: -122.27 };
const HOLIDAY: Coordinate = Coordinate { lat: 34.05, lng: -118.24 };

fn bay_area_input() -> RecommendationInput {
    RecommendationInput::new(HOUSE, WORKPLACE, HOLIDAY)
}

// =========================================================================
// End-to-end scenarios
// =========================================================================

#[test]
fn test_electric_commuter() {
    let catalog = VehicleCatalog::builtin();
    let input = bay_area_input().with_preferred_type("electric");
    let result = recommend(&catalog, &input).unwrap();

    assert_eq!(result.primary.vehicle_type, VehicleType::Electric);
    assert_eq!(result.primary.name, "Tesla Model 3");
    assert_eq!(result.runner_up.name, "Tesla Model Y");
    assert_eq!(result.carbon_rating, 5);
    assert_eq!(result.carbon_label, "Excellent (Near Zero Emissions)");

    // Great-circle distances: ~13.6 km commute, ~559 km holiday
    assert_relative_eq!(result.metrics.commute_distance_km, 13.6, epsilon = 0.05);
    assert_relative_eq!(result.metrics.holiday_distance_km, 559.2, epsilon = 0.05);
    assert_relative_eq!(
        result.metrics.total_distance_km,
        result.metrics.commute_distance_km + result.metrics.holiday_distance_km
    );

    // City commute, long holiday
    assert_eq!(result.metrics.terrain.city, 0.7);
    assert_eq!(result.metrics.terrain.highway, 0.3);
    assert_eq!(result.metrics.terrain.offroad, 0.4);

    assert!(result.summary.starts_with(
        "Based on your input, your daily commute is 13.6 km, and your holiday trip is 559.2 km"
    ));
    assert!(result.summary.contains("We recommend the Tesla Model 3 as your primary option because"));
    assert!(result.summary.contains("As a runner-up, we suggest the Tesla Model Y, which provides more cargo space."));
    assert!(result.summary.contains("Your estimated monthly commute cost with the Tesla Model 3 would be $"));
}

#[test]
fn test_no_suv_seats_nine() {
    let catalog = VehicleCatalog::builtin();
    let input = bay_area_input().with_preferred_type("suv").with_min_seats(9);
    let err = recommend(&catalog, &input).unwrap_err();

    assert!(matches!(err, RecommendError::NoVehiclesForType { .. }));
    let msg = err.to_string();
    assert!(msg.contains("suv"));
    assert!(msg.contains('9'));
}

#[test]
fn test_zero_distance_trip() {
    let catalog = VehicleCatalog::builtin();
    let input = RecommendationInput::new(HOUSE, HOUSE, HOUSE);
    let result = recommend(&catalog, &input).unwrap();

    assert_eq!(result.metrics.commute_distance_km, 0.0);
    assert_eq!(result.metrics.holiday_distance_km, 0.0);
    assert_eq!(result.metrics.total_distance_km, 0.0);
    assert_eq!(result.price_breakdown.primary, 0.0);
    assert!(result.summary.contains("would be $0.00."));

    // Range saturates for every vehicle under every habit combination
    let trip = TripDistances::from_locations(&HOUSE, &HOUSE, &HOUSE);
    assert_eq!(trip.total_km, 0.0);
    for (kids, trunk) in [(false, false), (true, false), (false, true), (true, true)] {
        let scorer = VehicleScorer::new(trip, Habits { has_kids: kids, trunk_preference: trunk });
        for vehicle in catalog.vehicles() {
            let scored = scorer.score(vehicle);
            assert_eq!(scored.sub_scores.range, 10.0, "{}", vehicle.name);
            assert!(scored.normalized_score.is_finite(), "{}", vehicle.name);
        }
    }
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn test_missing_location() {
    let catalog = VehicleCatalog::builtin();
    let mut input = bay_area_input();
    input.holiday = None;

    let err = recommend(&catalog, &input).unwrap_err();
    assert_eq!(err, RecommendError::MissingLocation);
    assert_eq!(err.to_string(), "Not enough location data to provide a recommendation.");
}

#[test]
fn test_unrecognised_type_has_no_vehicles() {
    let catalog = VehicleCatalog::builtin();
    let input = bay_area_input().with_preferred_type("truck");
    let err = recommend(&catalog, &input).unwrap_err();
    assert_eq!(
        err,
        RecommendError::NoVehiclesForType { vehicle_type: "truck".to_string(), min_seats: 5 }
    );
    assert_eq!(
        err.to_string(),
        "No truck vehicles found that meet your minimum seating requirement of 5. Try adjusting your preferences."
    );
}

#[test]
fn test_request_json() {
    let json = r#"{
        "house": {"lat": 37.77, "lng": -122.42},
        "workplace": {"lat": 37.80, "lng": -122.27},
        "holiday": {"lat": 34.05, "lng": -118.24},
        "minSeats": 7,
        "habits": {"hasKids": true, "trunkPreference": true},
        "preferredType": "any"
    }"#;
    let input: RecommendationInput = serde_json::from_str(json).unwrap();
    let result = recommend(&VehicleCatalog::builtin(), &input).unwrap();

    assert!(result.primary.seats >= 7);
    assert!(result.summary.ends_with(
        "This recommendation accounts for your family needs and prioritizes vehicles with larger cargo capacity."
    ));
}

// =========================================================================
// Properties
// =========================================================================

#[test]
fn test_primary_and_runner_up_distinct() {
    let catalog = VehicleCatalog::builtin();
    let recommender = Recommender::new(&catalog);
    let types = ["any", "electric", "hybrid", "suv", "sedan", "compact", "minivan"];

    for preferred in types {
        for min_seats in 1..=8 {
            for (kids, trunk) in [(false, false), (true, false), (false, true), (true, true)] {
                let input = bay_area_input()
                    .with_preferred_type(preferred)
                    .with_min_seats(min_seats)
                    .with_habits(kids, trunk);
                let Ok(result) = recommender.recommend(&input) else {
                    continue;
                };

                assert_ne!(result.primary.name, result.runner_up.name);
                assert!(result.primary.seats >= min_seats);
                if preferred != "any" {
                    assert_eq!(result.primary.vehicle_type.as_str(), preferred);
                }
                assert!((1..=5).contains(&result.carbon_rating));
            }
        }
    }
}

#[test]
fn test_deterministic_output() {
    let catalog = VehicleCatalog::builtin();
    let input = bay_area_input().with_habits(true, true);

    let first = serde_json::to_string(&recommend(&catalog, &input).unwrap()).unwrap();
    let second = serde_json::to_string(&recommend(&catalog, &input).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_catalog_not_mutated() {
    let catalog = VehicleCatalog::builtin();
    let before = catalog.vehicles().to_vec();
    let input = bay_area_input();
    let _ = recommend(&catalog, &input).unwrap();
    assert_eq!(catalog.vehicles(), before.as_slice());
    assert_eq!(input, bay_area_input());
}

// =========================================================================
// Fixture catalogs
// =========================================================================

fn fixture(name: &str, vehicle_type: VehicleType, seats: u32, price: u32) -> Vehicle {
    Vehicle {
        name: name.to_string(),
        vehicle_type,
        range_km: 600,
        seats,
        trunk_liters: 500,
        efficiency: 15.0,
        family_friendly: 7,
        price,
        terrain: TerrainRatings { city: 8, highway: 8, offroad: 3 },
    }
}

#[test]
fn test_fixture_catalog_single_entry() {
    let catalog = VehicleCatalog::new(vec![fixture("Solo", VehicleType::Sedan, 5, 25)]).unwrap();
    let result = recommend(&catalog, &bay_area_input()).unwrap();

    assert_eq!(result.primary.name, "Solo");
    assert_eq!(result.runner_up.name, "Solo");
    assert_eq!(result.runner_up_source, RunnerUpSource::SameAsPrimary);
    assert!(!result.summary.contains("runner-up"));
}

#[test]
fn test_fixture_catalog_fallback_ignores_type_filter() {
    let catalog = VehicleCatalog::new(vec![
        fixture("City Hatch", VehicleType::Compact, 4, 18),
        fixture("Family Wagon", VehicleType::Sedan, 5, 30),
    ])
    .unwrap();
    let input = bay_area_input().with_preferred_type("sedan");
    let result = recommend(&catalog, &input).unwrap();

    assert_eq!(result.primary.name, "Family Wagon");
    // The compact lacks seats, so the chain ends at the first other catalog vehicle
    assert_eq!(result.runner_up.name, "City Hatch");
    assert_eq!(result.runner_up_source, RunnerUpSource::CatalogFallback);
    assert!(result.summary.contains("which is more affordable."));
}

#[test]
fn test_csv_catalog_matches_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/vehicles.csv");
    let csv_catalog = VehicleCatalog::load_csv(&path).unwrap();
    let builtin = VehicleCatalog::builtin();

    let input = bay_area_input().with_habits(true, false);
    assert_eq!(recommend(&csv_catalog, &input), recommend(&builtin, &input));
}

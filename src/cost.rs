//! Operating Cost Estimation
//!
//! Projects energy cost for a month of commuting plus one holiday round trip.
//! Prices are fixed defaults unless overridden through [`EngineConfig`](crate::EngineConfig).

use crate::data::Vehicle;
use crate::utils::TripDistances;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 1.5;
pub const DEFAULT_ELECTRICITY_PRICE_PER_KWH: f64 = 0.15;
pub const DEFAULT_WORKING_DAYS_PER_MONTH: u32 = 22;

/// Unit prices and commute frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub fuel_price_per_liter: f64,
    pub electricity_price_per_kwh: f64,
    pub working_days_per_month: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
            electricity_price_per_kwh: DEFAULT_ELECTRICITY_PRICE_PER_KWH,
            working_days_per_month: DEFAULT_WORKING_DAYS_PER_MONTH,
        }
    }
}

impl CostModel {
    pub fn validate(&self) -> Result<()> {
        for (name, price) in [
            ("fuel_price_per_liter", self.fuel_price_per_liter),
            ("electricity_price_per_kwh", self.electricity_price_per_kwh),
        ] {
            if !price.is_finite() || price < 0.0 {
                bail!("{} must be a finite non-negative number, got {}", name, price);
            }
        }
        if self.working_days_per_month == 0 {
            bail!("working_days_per_month must be at least 1");
        }
        Ok(())
    }

    /// Energy cost of driving `distance_km`
    ///
    /// Electric: distance / km-per-kWh × price per kWh.
    /// Everything else: distance / km-per-L × price per litre.
    pub fn fuel_cost(&self, vehicle: &Vehicle, distance_km: f64) -> f64 {
        let unit_price = if vehicle.is_electric() {
            self.electricity_price_per_kwh
        } else {
            self.fuel_price_per_liter
        };
        distance_km / vehicle.efficiency * unit_price
    }

    /// Round-trip commute distance over a working month
    pub fn monthly_commute_km(&self, trip: &TripDistances) -> f64 {
        trip.commute_km * 2.0 * self.working_days_per_month as f64
    }

    /// Holiday round trip
    pub fn holiday_trip_km(&self, trip: &TripDistances) -> f64 {
        trip.holiday_km * 2.0
    }

    pub fn estimate(&self, vehicle: &Vehicle, trip: &TripDistances) -> CostEstimate {
        let monthly_commute = self.fuel_cost(vehicle, self.monthly_commute_km(trip));
        let holiday_trip = self.fuel_cost(vehicle, self.holiday_trip_km(trip));
        CostEstimate {
            monthly_commute,
            holiday_trip,
            total: monthly_commute + holiday_trip,
        }
    }
}

/// Cost breakdown for one vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub monthly_commute: f64,
    pub holiday_trip: f64,
    /// monthly commute + one holiday round trip
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VehicleCatalog;
    use approx::assert_relative_eq;

    #[test]
    fn test_fuel_cost_by_powertrain() {
        let catalog = VehicleCatalog::builtin();
        let model = CostModel::default();

        // 690 km / 6.9 km/kWh * 0.15
        let model3 = catalog.get("Tesla Model 3").unwrap();
        assert_relative_eq!(model.fuel_cost(model3, 690.0), 15.0, epsilon = 1e-9);

        // 245 km / 24.5 km/L * 1.5
        let prius = catalog.get("Toyota Prius").unwrap();
        assert_relative_eq!(model.fuel_cost(prius, 245.0), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate() {
        let catalog = VehicleCatalog::builtin();
        let civic = catalog.get("Honda Civic").unwrap(); // 15.7 km/L
        let trip = TripDistances { commute_km: 10.0, holiday_km: 100.0, total_km: 110.0 };
        let estimate = CostModel::default().estimate(civic, &trip);

        assert_relative_eq!(estimate.monthly_commute, 440.0 / 15.7 * 1.5, epsilon = 1e-9);
        assert_relative_eq!(estimate.holiday_trip, 200.0 / 15.7 * 1.5, epsilon = 1e-9);
        assert_relative_eq!(estimate.total, estimate.monthly_commute + estimate.holiday_trip);
    }

    #[test]
    fn test_zero_trip_costs_nothing() {
        let catalog = VehicleCatalog::builtin();
        let trip = TripDistances { commute_km: 0.0, holiday_km: 0.0, total_km: 0.0 };
        for vehicle in catalog.vehicles() {
            assert_eq!(CostModel::default().estimate(vehicle, &trip).total, 0.0);
        }
    }

    #[test]
    fn test_validate() {
        assert!(CostModel::default().validate().is_ok());
        let bad = CostModel { fuel_price_per_liter: -1.0, ..Default::default() };
        assert!(bad.validate().is_err());
        let no_days = CostModel { working_days_per_month: 0, ..Default::default() };
        assert!(no_days.validate().is_err());
    }
}

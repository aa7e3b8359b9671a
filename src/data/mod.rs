//! Vehicle Catalog
//!
//! Holds the read-only vehicle catalog the engine scores against. The catalog
//! is constructed once (built-in data or a CSV file) and handed to the
//! [`Recommender`](crate::Recommender) by reference, so tests can substitute
//! fixture catalogs.

mod builtin;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Column requirements for catalog CSV files
pub const REQUIRED_CATALOG_COLS: &[&str] = &[
    "name",
    "type",
    "range",
    "seats",
    "trunk",
    "efficiency",
    "family_friendly",
    "price",
    "terrain_city",
    "terrain_highway",
    "terrain_offroad",
];

/// Powertrain / body category of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Electric,
    Hybrid,
    Suv,
    Sedan,
    Compact,
    Minivan,
}

impl VehicleType {
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Electric,
        VehicleType::Hybrid,
        VehicleType::Suv,
        VehicleType::Sedan,
        VehicleType::Compact,
        VehicleType::Minivan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Electric => "electric",
            VehicleType::Hybrid => "hybrid",
            VehicleType::Suv => "suv",
            VehicleType::Sedan => "sedan",
            VehicleType::Compact => "compact",
            VehicleType::Minivan => "minivan",
        }
    }

    pub fn is_electric(&self) -> bool {
        matches!(self, VehicleType::Electric)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`VehicleType`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle type '{0}'")]
pub struct ParseVehicleTypeError(pub String);

impl FromStr for VehicleType {
    type Err = ParseVehicleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| ParseVehicleTypeError(s.to_string()))
    }
}

/// Per-surface suitability ratings (1-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainRatings {
    pub city: u8,
    pub highway: u8,
    pub offroad: u8,
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique key within a catalog
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    #[serde(rename = "range")]
    pub range_km: u32,
    pub seats: u32,
    #[serde(rename = "trunk")]
    pub trunk_liters: u32,
    /// km/kWh for electric vehicles, km/L otherwise
    pub efficiency: f64,
    /// 1-10
    pub family_friendly: u8,
    /// Base price in thousands of currency units
    pub price: u32,
    pub terrain: TerrainRatings,
}

impl Vehicle {
    pub fn is_electric(&self) -> bool {
        self.vehicle_type.is_electric()
    }

    /// Unit the `efficiency` figure is expressed in
    pub fn efficiency_unit(&self) -> &'static str {
        if self.is_electric() {
            "km/kWh"
        } else {
            "km/L"
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Vehicle name must not be empty");
        }
        if self.seats == 0 {
            bail!("Vehicle '{}' has no seats", self.name);
        }
        if !self.efficiency.is_finite() || self.efficiency <= 0.0 {
            bail!(
                "Vehicle '{}' has invalid efficiency {}",
                self.name,
                self.efficiency
            );
        }
        let ratings = [
            ("familyFriendly", self.family_friendly),
            ("terrain.city", self.terrain.city),
            ("terrain.highway", self.terrain.highway),
            ("terrain.offroad", self.terrain.offroad),
        ];
        for (field, value) in ratings {
            if !(1..=10).contains(&value) {
                bail!(
                    "Vehicle '{}' has {} = {} (expected 1-10)",
                    self.name,
                    field,
                    value
                );
            }
        }
        Ok(())
    }
}

/// Immutable, ordered vehicle catalog
///
/// Catalog order is significant: it is the tie-break order for equal scores
/// and the search order of the runner-up fallbacks.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
    index: FxHashMap<String, usize>,
}

impl VehicleCatalog {
    /// Build a catalog from entries, validating each one
    ///
    /// Rejects empty catalogs, duplicate names, zero seats, non-positive
    /// efficiency and ratings outside 1-10.
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self> {
        if vehicles.is_empty() {
            bail!("Vehicle catalog is empty");
        }

        let mut index = FxHashMap::default();
        for (idx, vehicle) in vehicles.iter().enumerate() {
            vehicle.validate()?;
            if index.insert(vehicle.name.clone(), idx).is_some() {
                bail!("Duplicate vehicle name in catalog: '{}'", vehicle.name);
            }
        }

        Ok(Self { vehicles, index })
    }

    /// The 32-vehicle catalog shipped with the crate
    pub fn builtin() -> Self {
        let vehicles = builtin::vehicles();
        let index = vehicles
            .iter()
            .enumerate()
            .map(|(idx, v)| (v.name.clone(), idx))
            .collect();
        Self { vehicles, index }
    }

    /// Load a catalog from CSV
    ///
    /// Expects the columns listed in [`REQUIRED_CATALOG_COLS`]. Numeric columns
    /// may be inferred as integers or floats; they are cast before conversion.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load vehicle catalog: {:?}", path))?;

        let vehicles = Self::vehicles_from_frame(&df)
            .with_context(|| format!("Invalid vehicle catalog: {:?}", path))?;
        let catalog = Self::new(vehicles)?;

        tracing::info!("Loaded {} vehicles from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    fn vehicles_from_frame(df: &DataFrame) -> Result<Vec<Vehicle>> {
        for col_name in REQUIRED_CATALOG_COLS {
            if df.column(col_name).is_err() {
                bail!("Column '{}' not found", col_name);
            }
        }

        let names = df.column("name")?.str()
            .with_context(|| "Column 'name' is not string type")?;
        let types = df.column("type")?.str()
            .with_context(|| "Column 'type' is not string type")?;

        let numeric = |name: &str| -> Result<Float64Chunked> {
            let series = df
                .column(name)?
                .as_materialized_series()
                .cast(&DataType::Float64)
                .with_context(|| format!("Column '{}' is not numeric", name))?;
            Ok(series.f64()?.clone())
        };

        let range = numeric("range")?;
        let seats = numeric("seats")?;
        let trunk = numeric("trunk")?;
        let efficiency = numeric("efficiency")?;
        let family = numeric("family_friendly")?;
        let price = numeric("price")?;
        let city = numeric("terrain_city")?;
        let highway = numeric("terrain_highway")?;
        let offroad = numeric("terrain_offroad")?;

        let mut vehicles = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let row = idx + 1;
            let name = names
                .get(idx)
                .with_context(|| format!("Row {}: missing name", row))?;
            let type_str = types
                .get(idx)
                .with_context(|| format!("Row {}: missing type", row))?;
            let vehicle_type = type_str
                .parse::<VehicleType>()
                .with_context(|| format!("Row {} ({})", row, name))?;

            let get = |chunked: &Float64Chunked, col_name: &str| -> Result<f64> {
                chunked
                    .get(idx)
                    .with_context(|| format!("Row {} ({}): missing {}", row, name, col_name))
            };

            vehicles.push(Vehicle {
                name: name.trim().to_string(),
                vehicle_type,
                range_km: as_whole(get(&range, "range")?, "range", name)?,
                seats: as_whole(get(&seats, "seats")?, "seats", name)?,
                trunk_liters: as_whole(get(&trunk, "trunk")?, "trunk", name)?,
                efficiency: get(&efficiency, "efficiency")?,
                family_friendly: as_rating(get(&family, "family_friendly")?, "family_friendly", name)?,
                price: as_whole(get(&price, "price")?, "price", name)?,
                terrain: TerrainRatings {
                    city: as_rating(get(&city, "terrain_city")?, "terrain_city", name)?,
                    highway: as_rating(get(&highway, "terrain_highway")?, "terrain_highway", name)?,
                    offroad: as_rating(get(&offroad, "terrain_offroad")?, "terrain_offroad", name)?,
                },
            });
        }

        Ok(vehicles)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, name: &str) -> Option<&Vehicle> {
        self.index.get(name).map(|&idx| &self.vehicles[idx])
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

fn as_whole(value: f64, column: &str, name: &str) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        bail!("Vehicle '{}': {} must be a non-negative integer, got {}", name, column, value);
    }
    Ok(value as u32)
}

fn as_rating(value: f64, column: &str, name: &str) -> Result<u8> {
    if !value.is_finite() || value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
        bail!("Vehicle '{}': {} must be an integer rating, got {}", name, column, value);
    }
    Ok(value as u8)
}

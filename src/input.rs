//! Recommendation input
//!
//! `RecommendationInput` is the loosely-typed record a caller hands over
//! (locations may be absent, the type filter is free text). `validate` turns
//! it into a `ValidatedInput` the engine can rely on.

use crate::data::{ParseVehicleTypeError, VehicleType};
use crate::error::RecommendError;
use crate::utils::Coordinate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SEATS: u32 = 5;

fn default_min_seats() -> u32 {
    DEFAULT_MIN_SEATS
}

/// Household habits that switch optional sub-scores on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Habits {
    pub has_kids: bool,
    pub trunk_preference: bool,
}

/// Optional vehicle-type filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypePreference {
    #[default]
    Any,
    Only(VehicleType),
}

impl TypePreference {
    /// Parse a type filter; `None`, empty and `"any"` mean no filter
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn parse(raw: Option<&str>) -> Result<Self, ParseVehicleTypeError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(TypePreference::Any);
        };
        if raw.eq_ignore_ascii_case("any") {
            return Ok(TypePreference::Any);
        }
        raw.parse::<VehicleType>().map(TypePreference::Only)
    }

    pub fn vehicle_type(&self) -> Option<VehicleType> {
        match self {
            TypePreference::Any => None,
            TypePreference::Only(t) => Some(*t),
        }
    }
}

/// Caller-supplied request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInput {
    #[serde(default)]
    pub house: Option<Coordinate>,
    #[serde(default)]
    pub workplace: Option<Coordinate>,
    #[serde(default)]
    pub holiday: Option<Coordinate>,
    #[serde(default = "default_min_seats")]
    pub min_seats: u32,
    #[serde(default)]
    pub habits: Habits,
    /// A vehicle type, `"any"`, or absent
    #[serde(default)]
    pub preferred_type: Option<String>,
}

/// Input after validation: all locations present and finite, seats positive,
/// type filter resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub house: Coordinate,
    pub workplace: Coordinate,
    pub holiday: Coordinate,
    pub min_seats: u32,
    pub habits: Habits,
    pub preference: TypePreference,
}

impl RecommendationInput {
    pub fn new(house: Coordinate, workplace: Coordinate, holiday: Coordinate) -> Self {
        Self {
            house: Some(house),
            workplace: Some(workplace),
            holiday: Some(holiday),
            min_seats: DEFAULT_MIN_SEATS,
            habits: Habits::default(),
            preferred_type: None,
        }
    }

    pub fn with_min_seats(mut self, min_seats: u32) -> Self {
        self.min_seats = min_seats;
        self
    }

    pub fn with_habits(mut self, has_kids: bool, trunk_preference: bool) -> Self {
        self.habits = Habits { has_kids, trunk_preference };
        self
    }

    pub fn with_preferred_type(mut self, preferred_type: impl Into<String>) -> Self {
        self.preferred_type = Some(preferred_type.into());
        self
    }

    /// Build an input from flat query parameters
    ///
    /// Keys: `houseLat`, `houseLng`, `workplaceLat`, `workplaceLng`,
    /// `holidayLat`, `holidayLng`, `minSeats` (default 5), `hasKids` and
    /// `trunk` (`"1"` = true), `preferredType` (default `"any"`). An absent
    /// coordinate key is a missing location; an unparsable one is invalid.
    pub fn from_query_params<'a, I>(params: I) -> Result<Self, RecommendError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let params: FxHashMap<&str, &str> = params.into_iter().collect();

        let coord = |lat_key: &str, lng_key: &str| -> Result<Coordinate, RecommendError> {
            let parse = |key: &str| {
                let raw = params.get(key).ok_or(RecommendError::MissingLocation)?;
                raw.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or(RecommendError::InvalidCoordinate)
            };
            Ok(Coordinate::new(parse(lat_key)?, parse(lng_key)?))
        };

        let house = coord("houseLat", "houseLng")?;
        let workplace = coord("workplaceLat", "workplaceLng")?;
        let holiday = coord("holidayLat", "holidayLng")?;

        let min_seats = match params.get("minSeats") {
            None => DEFAULT_MIN_SEATS,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| RecommendError::InvalidSeatCount)?,
        };

        let flag = |key: &str| params.get(key).is_some_and(|v| v.trim() == "1");

        Ok(Self {
            house: Some(house),
            workplace: Some(workplace),
            holiday: Some(holiday),
            min_seats,
            habits: Habits {
                has_kids: flag("hasKids"),
                trunk_preference: flag("trunk"),
            },
            preferred_type: params.get("preferredType").map(|s| s.to_string()),
        })
    }

    /// Check presence and ranges, resolve the type filter
    ///
    /// An unrecognised type fails like a type with no matching vehicles.
    pub fn validate(&self) -> Result<ValidatedInput, RecommendError> {
        let (Some(house), Some(workplace), Some(holiday)) = (self.house, self.workplace, self.holiday)
        else {
            return Err(RecommendError::MissingLocation);
        };

        if ![house, workplace, holiday].iter().all(Coordinate::is_valid) {
            return Err(RecommendError::InvalidCoordinate);
        }
        if self.min_seats == 0 {
            return Err(RecommendError::InvalidSeatCount);
        }

        // A type no catalog vehicle can have leaves no candidates
        let preference = TypePreference::parse(self.preferred_type.as_deref()).map_err(|err| {
            RecommendError::NoVehiclesForType {
                vehicle_type: err.0.trim().to_string(),
                min_seats: self.min_seats,
            }
        })?;

        Ok(ValidatedInput {
            house,
            workplace,
            holiday,
            min_seats: self.min_seats,
            habits: self.habits,
            preference,
        })
    }
}

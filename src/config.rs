//! Engine configuration
//!
//! Everything is optional in the JSON file; missing fields keep their
//! defaults. Example:
//!
//! ```json
//! { "cost": { "fuel_price_per_liter": 1.9, "working_days_per_month": 20 } }
//! ```

use crate::cost::CostModel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable engine parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub cost: CostModel,
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config = Self::from_json(&contents)
            .with_context(|| format!("Invalid engine config: {:?}", path))?;

        tracing::info!(
            "Loaded engine config from {:?} (fuel {:.2}/L, electricity {:.2}/kWh, {} working days)",
            path,
            config.cost.fuel_price_per_liter,
            config.cost.electricity_price_per_kwh,
            config.cost.working_days_per_month,
        );
        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse engine config JSON")?;
        config.cost.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"cost": {"fuel_price_per_liter": 1.9}}"#).unwrap();
        assert_eq!(config.cost.fuel_price_per_liter, 1.9);
        assert_eq!(config.cost.electricity_price_per_kwh, 0.15);
        assert_eq!(config.cost.working_days_per_month, 22);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(EngineConfig::from_json(r#"{"cost": {"working_days_per_month": 0}}"#).is_err());
        assert!(EngineConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read engine config"));
    }
}

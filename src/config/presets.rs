//! Configuration presets.
//!
//! - **Standard**: defaults, subdivided compartments are accepted with a warning
//! - **Strict**: exceeded compartments are always blocked and mechanical
//!   extraction defaults to 12 renovations per hour
//!
//! # Example
//!
//! ```rust
//! use scie::config::ConfigPreset;
//!
//! let config = ConfigPreset::Strict.to_config();
//! assert_eq!(config.smoke.default_renovations_per_hour, 12);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::core::EngineConfig;
use super::sections::{CompartmentConfig, OccupancyConfig, SmokeConfig};
use crate::compartment::CompartmentPolicy;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPreset {
    Standard,
    Strict,
}

impl ConfigPreset {
    pub fn to_config(self) -> EngineConfig {
        match self {
            ConfigPreset::Standard => EngineConfig::default(),
            ConfigPreset::Strict => strict_preset(),
        }
    }
}

impl FromStr for ConfigPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ConfigPreset::Standard),
            "strict" => Ok(ConfigPreset::Strict),
            _ => Err(Error::unknown_tag("config preset", s)),
        }
    }
}

fn strict_preset() -> EngineConfig {
    EngineConfig {
        smoke: SmokeConfig {
            default_renovations_per_hour: 12,
            ..SmokeConfig::default()
        },
        compartment: CompartmentConfig {
            policy: CompartmentPolicy::Block,
        },
        occupancy: OccupancyConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::validate_config;

    #[test]
    fn test_presets_are_valid() {
        for preset in [ConfigPreset::Standard, ConfigPreset::Strict] {
            assert!(validate_config(&preset.to_config()).is_ok());
        }
    }

    #[test]
    fn test_strict_blocks_compartments() {
        let config = ConfigPreset::Strict.to_config();
        assert_eq!(config.compartment.policy, CompartmentPolicy::Block);
        assert_eq!(config.smoke.canton_max_area, 1_600.0);
    }

    #[test]
    fn test_parse_preset_name() {
        assert_eq!(
            "Strict".parse::<ConfigPreset>().unwrap(),
            ConfigPreset::Strict
        );
        assert!("lenient".parse::<ConfigPreset>().is_err());
    }
}

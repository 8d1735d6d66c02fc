use serde::{Deserialize, Serialize};

use crate::compartment::CompartmentPolicy;
use crate::thresholds::smoke::CANTON_MAX_AREA;

/// Smoke control defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmokeConfig {
    /// Renovation rate used for mechanical extraction when the caller does
    /// not choose one
    #[serde(default = "default_renovations_per_hour")]
    pub default_renovations_per_hour: u32,

    /// Canton area above which the canton method flags the result, m²
    #[serde(default = "default_canton_max_area")]
    pub canton_max_area: f64,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            default_renovations_per_hour: default_renovations_per_hour(),
            canton_max_area: default_canton_max_area(),
        }
    }
}

/// Compartment policy applied by the project assessment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompartmentConfig {
    #[serde(default)]
    pub policy: CompartmentPolicy,
}

/// Occupancy suggestion behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyConfig {
    /// Suggest an occupancy for spaces declared with zero occupants
    #[serde(default = "default_suggest")]
    pub suggest: bool,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            suggest: default_suggest(),
        }
    }
}

pub fn default_renovations_per_hour() -> u32 {
    6
}
pub fn default_canton_max_area() -> f64 {
    CANTON_MAX_AREA
}
fn default_suggest() -> bool {
    true
}

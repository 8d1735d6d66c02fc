use serde::{Deserialize, Serialize};

use super::sections::{CompartmentConfig, OccupancyConfig, SmokeConfig};
use crate::smoke::{CantonRequest, Ventilation};

/// Root configuration of the compliance engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Smoke control defaults
    #[serde(default)]
    pub smoke: SmokeConfig,

    /// Compartment policy
    #[serde(default)]
    pub compartment: CompartmentConfig,

    /// Occupancy suggestion
    #[serde(default)]
    pub occupancy: OccupancyConfig,
}

/// Smoke calculations reach [`crate::assess`] already sized inside the
/// snapshot, so the engine never builds smoke requests itself. Callers
/// sizing a zone go through these helpers to pick up the configured
/// defaults.
impl EngineConfig {
    /// Mechanical ventilation at the configured default rate, for
    /// [`crate::smoke::RatioRequest::new`]
    pub fn default_mechanical_ventilation(&self) -> Ventilation {
        Ventilation::Mechanical {
            renovations_per_hour: self.smoke.default_renovations_per_hour,
        }
    }

    /// Apply the configured canton limit to a request, replacing whatever
    /// limit it carried
    pub fn canton_request(&self, request: CantonRequest) -> CantonRequest {
        request.with_max_canton_area(self.smoke.canton_max_area)
    }
}

use crate::errors::{Error, Result};
use crate::thresholds::smoke::{
    alpha_coefficients, AERODYNAMIC_COEFFICIENT, CANTON_ALPHA_SLOPE, CANTON_HIGH_HEIGHT,
    CANTON_LOW_HEIGHT, CANTON_MAX_AREA,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fire risk class of the canton contents (1 low, 2 ordinary, 3 high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CantonRiskClass {
    Low = 1,
    Ordinary = 2,
    High = 3,
}

impl CantonRiskClass {
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl From<CantonRiskClass> for u8 {
    fn from(risk: CantonRiskClass) -> u8 {
        risk.ordinal()
    }
}

impl TryFrom<u8> for CantonRiskClass {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(CantonRiskClass::Low),
            2 => Ok(CantonRiskClass::Ordinary),
            3 => Ok(CantonRiskClass::High),
            other => Err(Error::unknown_tag("canton risk class", other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CantonRequest {
    /// Canton area, m²
    pub canton_area: f64,
    /// Reference height H, m
    pub reference_height: f64,
    pub risk: CantonRiskClass,
    /// Limit above which the canton is flagged, m²
    #[serde(default = "default_max_canton_area")]
    pub max_canton_area: f64,
}

fn default_max_canton_area() -> f64 {
    CANTON_MAX_AREA
}

impl CantonRequest {
    pub fn new(canton_area: f64, reference_height: f64, risk: CantonRiskClass) -> Self {
        Self {
            canton_area,
            reference_height,
            risk,
            max_canton_area: default_max_canton_area(),
        }
    }

    pub fn with_max_canton_area(mut self, max_canton_area: f64) -> Self {
        self.max_canton_area = max_canton_area;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CantonResult {
    /// Coefficient alpha, percent of canton area
    pub alpha_percent: f64,
    /// Useful vent area, m²
    pub useful_area: f64,
    /// Geometric vent area, m²
    pub geometric_area: f64,
    pub exceeds_canton_limit: bool,
}

impl CantonResult {
    /// All-zero result returned when area or height is missing. It means
    /// "not computed", not a physical sizing.
    pub const NOT_COMPUTED: CantonResult = CantonResult {
        alpha_percent: 0.0,
        useful_area: 0.0,
        geometric_area: 0.0,
        exceeds_canton_limit: false,
    };

    pub fn is_computed(&self) -> bool {
        self.alpha_percent > 0.0
    }
}

/// Alpha coefficient (percent) for a reference height and risk class
pub fn alpha_percent(reference_height: f64, risk: CantonRiskClass) -> f64 {
    let coefficients = alpha_coefficients(risk);
    if reference_height <= CANTON_LOW_HEIGHT {
        coefficients.base
    } else if reference_height <= CANTON_HIGH_HEIGHT {
        coefficients.base + (reference_height - CANTON_LOW_HEIGHT) * CANTON_ALPHA_SLOPE
    } else {
        coefficients.saturated
    }
}

/// Size a canton with the coefficient method
pub fn size_canton(request: &CantonRequest) -> CantonResult {
    if request.canton_area <= 0.0 || request.reference_height <= 0.0 {
        debug!(
            canton_area = request.canton_area,
            reference_height = request.reference_height,
            "Canton area or height missing, sizing not computed"
        );
        return CantonResult::NOT_COMPUTED;
    }

    let alpha = alpha_percent(request.reference_height, request.risk);
    let useful_area = request.canton_area * (alpha / 100.0);
    CantonResult {
        alpha_percent: alpha,
        useful_area,
        geometric_area: useful_area / AERODYNAMIC_COEFFICIENT,
        exceeds_canton_limit: request.canton_area > request.max_canton_area,
    }
}

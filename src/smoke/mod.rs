//! Smoke control sizing.
//!
//! Two independent methods are offered and a calculation commits to exactly
//! one of them:
//!
//! - **Ratio-based** (general regulation): natural opening area as a fraction
//!   of floor area, or mechanical flow from volume renovations.
//! - **Canton coefficient** (APSAD R17 style): useful vent area as a
//!   height-dependent percentage of the canton area.
//!
//! Each method's result carries only its own fields, so there is no
//! ambiguity between a zero result and a field the method never computes.

pub mod canton;
pub mod ratio;

pub use canton::{size_canton, CantonRequest, CantonResult, CantonRiskClass};
pub use ratio::{
    size_ratio_based, MechanicalFlow, RatioRequest, RatioResult, SmokeZoneType, Ventilation,
};

use serde::{Deserialize, Serialize};

/// Result of one smoke calculation, tagged by method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SmokeResult {
    RatioBased(RatioResult),
    CantonCoefficient(CantonResult),
}

impl SmokeResult {
    /// Useful opening area in m², common to both methods
    pub fn useful_area(&self) -> f64 {
        match self {
            SmokeResult::RatioBased(result) => result.useful_area,
            SmokeResult::CantonCoefficient(result) => result.useful_area,
        }
    }
}

/// Named smoke calculation record for a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmokeCalculation {
    pub name: String,
    pub area: f64,
    pub height: f64,
    pub notes: String,
    pub result: SmokeResult,
}

impl SmokeCalculation {
    /// The mechanical note reports the rate actually applied, after any
    /// zone override of the requested renovations per hour.
    pub fn ratio_based(name: impl Into<String>, request: &RatioRequest) -> Self {
        let result = size_ratio_based(request);
        let notes = match &result.mechanical {
            None => format!(
                "SCIE Geral - Natural (1/{})",
                crate::thresholds::smoke::ratio_factor(request.zone)
            ),
            Some(flow) => format!(
                "SCIE Geral - Mecânica ({} ren/h)",
                flow.renovations_per_hour
            ),
        };
        Self {
            name: name.into(),
            area: request.area,
            height: request.height,
            notes,
            result: SmokeResult::RatioBased(result),
        }
    }

    pub fn canton(name: impl Into<String>, request: &CantonRequest) -> Self {
        let result = size_canton(request);
        Self {
            name: name.into(),
            area: request.canton_area,
            height: request.reference_height,
            notes: format!(
                "APSAD R17 - Classe {} - Alpha {:.2}%",
                request.risk.ordinal(),
                result.alpha_percent
            ),
            result: SmokeResult::CantonCoefficient(result),
        }
    }
}

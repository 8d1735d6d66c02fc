use crate::smoke::{CantonRiskClass, SmokeZoneType};

/// Floor area per m² of useful opening for natural extraction in stage spaces
pub const STAGE_RATIO_FACTOR: f64 = 50.0;
/// Floor area per m² of useful opening for natural extraction elsewhere
pub const DEFAULT_RATIO_FACTOR: f64 = 200.0;
/// Useful area of a single exhaust vent, m²
pub const VENT_UNIT_AREA: f64 = 1.0;

/// Minimum mechanical flow for generic spaces, m³/h per 100 m² of floor
pub const GENERIC_MIN_FLOW_PER_100_M2: f64 = 3_600.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Natural-extraction ratio factor for a zone type
pub fn ratio_factor(zone: SmokeZoneType) -> f64 {
    match zone {
        SmokeZoneType::Stage => STAGE_RATIO_FACTOR,
        _ => DEFAULT_RATIO_FACTOR,
    }
}

/// Renovations per hour imposed by the zone type, overriding the caller's
/// chosen rate
pub fn forced_renovations(zone: SmokeZoneType) -> Option<u32> {
    match zone {
        SmokeZoneType::Parking => Some(600),
        SmokeZoneType::Basement | SmokeZoneType::Stage => Some(12),
        _ => None,
    }
}

/// Reference heights bounding the linear section of the alpha curve, m
pub const CANTON_LOW_HEIGHT: f64 = 3.0;
pub const CANTON_HIGH_HEIGHT: f64 = 8.0;
/// Alpha increase per meter of reference height above the low bound, %
pub const CANTON_ALPHA_SLOPE: f64 = 0.1;
/// Aerodynamic coefficient converting useful into geometric area
pub const AERODYNAMIC_COEFFICIENT: f64 = 0.6;
/// Advisory canton area limit, m²
pub const CANTON_MAX_AREA: f64 = 1_600.0;

/// Alpha coefficients (percent) of one canton risk class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaCoefficients {
    /// Value up to the low reference height, start of the linear section
    pub base: f64,
    /// Value above the high reference height
    pub saturated: f64,
}

pub fn alpha_coefficients(risk: CantonRiskClass) -> AlphaCoefficients {
    match risk {
        CantonRiskClass::Low => AlphaCoefficients {
            base: 0.5,
            saturated: 1.0,
        },
        CantonRiskClass::Ordinary => AlphaCoefficients {
            base: 1.0,
            saturated: 1.5,
        },
        CantonRiskClass::High => AlphaCoefficients {
            base: 1.5,
            saturated: 2.0,
        },
    }
}

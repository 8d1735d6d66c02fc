use crate::errors::{Error, Result};
use crate::thresholds::smoke::{
    forced_renovations, ratio_factor, GENERIC_MIN_FLOW_PER_100_M2, SECONDS_PER_HOUR, VENT_UNIT_AREA,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Zone typology for the ratio-based method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokeZoneType {
    Generic,
    Basement,
    Atrium,
    Stage,
    Parking,
    Circulation,
}

impl SmokeZoneType {
    pub const ALL: [SmokeZoneType; 6] = [
        SmokeZoneType::Generic,
        SmokeZoneType::Basement,
        SmokeZoneType::Atrium,
        SmokeZoneType::Stage,
        SmokeZoneType::Parking,
        SmokeZoneType::Circulation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SmokeZoneType::Generic => "generic",
            SmokeZoneType::Basement => "basement",
            SmokeZoneType::Atrium => "atrium",
            SmokeZoneType::Stage => "stage",
            SmokeZoneType::Parking => "parking",
            SmokeZoneType::Circulation => "circulation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SmokeZoneType::Generic => "Espaço Genérico (Regra Geral)",
            SmokeZoneType::Basement => "Piso Enterrado (Cave)",
            SmokeZoneType::Atrium => "Átrio / Espaço Amplo",
            SmokeZoneType::Stage => "Palco / Espaço Cénico",
            SmokeZoneType::Parking => "Parque de Estacionamento",
            SmokeZoneType::Circulation => "Via de Evacuação Horizontal",
        }
    }
}

impl FromStr for SmokeZoneType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SmokeZoneType::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| Error::unknown_tag("smoke zone type", s))
    }
}

/// Extraction means chosen for the zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Ventilation {
    /// Vents and openings
    Natural,
    /// Extraction fans at a caller-chosen renovation rate (6, 12 or 15 are
    /// typical); some zone types impose their own rate
    Mechanical { renovations_per_hour: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRequest {
    pub zone: SmokeZoneType,
    /// Floor area, m²
    pub area: f64,
    /// Ceiling height, m
    pub height: f64,
    pub ventilation: Ventilation,
}

impl RatioRequest {
    pub fn new(zone: SmokeZoneType, area: f64, height: f64, ventilation: Ventilation) -> Self {
        Self {
            zone,
            area,
            height,
            ventilation,
        }
    }
}

/// Mechanical extraction sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MechanicalFlow {
    /// Rate actually applied after zone-type overrides
    pub renovations_per_hour: u32,
    pub volume: f64,
    pub flow_m3_per_h: f64,
    pub flow_m3_per_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioResult {
    /// Useful natural opening area, m²
    pub useful_area: f64,
    /// Number of 1 m² exhaust vents covering the useful area
    pub vent_count: u32,
    /// Present only for mechanical ventilation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanical: Option<MechanicalFlow>,
}

fn natural_opening_area(zone: SmokeZoneType, area: f64) -> f64 {
    if area > 0.0 {
        area / ratio_factor(zone)
    } else {
        0.0
    }
}

fn mechanical_flow(request: &RatioRequest, chosen_rate: u32) -> MechanicalFlow {
    let renovations = forced_renovations(request.zone).unwrap_or(chosen_rate);
    let volume = request.area * request.height;
    if volume <= 0.0 {
        debug!(
            zone = request.zone.as_str(),
            "Zero volume, mechanical flow not computed"
        );
        return MechanicalFlow {
            renovations_per_hour: renovations,
            volume: 0.0,
            flow_m3_per_h: 0.0,
            flow_m3_per_s: 0.0,
        };
    }

    let mut flow_m3_per_h = volume * f64::from(renovations);
    if request.zone == SmokeZoneType::Generic {
        let area_minimum = (request.area / 100.0) * GENERIC_MIN_FLOW_PER_100_M2;
        flow_m3_per_h = flow_m3_per_h.max(area_minimum);
    }
    MechanicalFlow {
        renovations_per_hour: renovations,
        volume,
        flow_m3_per_h,
        flow_m3_per_s: flow_m3_per_h / SECONDS_PER_HOUR,
    }
}

/// Size a zone with the ratio-based method
pub fn size_ratio_based(request: &RatioRequest) -> RatioResult {
    let useful_area = natural_opening_area(request.zone, request.area);
    let vent_count = (useful_area / VENT_UNIT_AREA).ceil() as u32;
    let mechanical = match request.ventilation {
        Ventilation::Natural => None,
        Ventilation::Mechanical {
            renovations_per_hour,
        } => Some(mechanical_flow(request, renovations_per_hour)),
    };
    RatioResult {
        useful_area,
        vent_count,
        mechanical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mechanical(zone: SmokeZoneType, area: f64, height: f64, rate: u32) -> MechanicalFlow {
        let request = RatioRequest::new(
            zone,
            area,
            height,
            Ventilation::Mechanical {
                renovations_per_hour: rate,
            },
        );
        size_ratio_based(&request)
            .mechanical
            .expect("mechanical ventilation yields a flow")
    }

    #[test]
    fn test_natural_ratio() {
        let generic = size_ratio_based(&RatioRequest::new(
            SmokeZoneType::Generic,
            500.0,
            4.0,
            Ventilation::Natural,
        ));
        assert_eq!(generic.useful_area, 2.5);
        assert_eq!(generic.vent_count, 3);
        assert!(generic.mechanical.is_none());

        let stage = size_ratio_based(&RatioRequest::new(
            SmokeZoneType::Stage,
            500.0,
            12.0,
            Ventilation::Natural,
        ));
        assert_eq!(stage.useful_area, 10.0);
        assert_eq!(stage.vent_count, 10);
    }

    #[test]
    fn test_generic_flow_floored_by_area_minimum() {
        // 200 m² x 2.5 m x 6 ren/h = 3000 m³/h, area minimum is 7200 m³/h
        let flow = mechanical(SmokeZoneType::Generic, 200.0, 2.5, 6);
        assert_eq!(flow.flow_m3_per_h, 7_200.0);
        assert_eq!(flow.flow_m3_per_s, 2.0);

        // 100 m² x 10 m x 6 ren/h = 6000 m³/h, above the 3600 m³/h minimum
        let tall = mechanical(SmokeZoneType::Generic, 100.0, 10.0, 6);
        assert_eq!(tall.flow_m3_per_h, 6_000.0);
    }

    #[test]
    fn test_forced_rates_ignore_caller_choice() {
        let parking = mechanical(SmokeZoneType::Parking, 100.0, 3.0, 6);
        assert_eq!(parking.renovations_per_hour, 600);
        assert_eq!(parking.flow_m3_per_h, 180_000.0);
        assert_eq!(parking.flow_m3_per_s, 50.0);

        let basement = mechanical(SmokeZoneType::Basement, 100.0, 3.0, 15);
        assert_eq!(basement.renovations_per_hour, 12);
        assert_eq!(basement.flow_m3_per_h, 3_600.0);
    }

    #[test]
    fn test_area_minimum_only_for_generic() {
        let atrium = mechanical(SmokeZoneType::Atrium, 200.0, 2.5, 6);
        assert_eq!(atrium.flow_m3_per_h, 3_000.0);
    }

    #[test]
    fn test_zero_inputs_are_not_computed() {
        let result = size_ratio_based(&RatioRequest::new(
            SmokeZoneType::Generic,
            0.0,
            3.0,
            Ventilation::Mechanical {
                renovations_per_hour: 6,
            },
        ));
        assert_eq!(result.useful_area, 0.0);
        assert_eq!(result.vent_count, 0);
        let flow = result.mechanical.expect("mechanical record present");
        assert_eq!(flow.flow_m3_per_h, 0.0);
    }
}

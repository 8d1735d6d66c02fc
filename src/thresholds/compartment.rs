use crate::core::{RiskCategory, UtilizationProfile, UtilizationType};
use serde::{Deserialize, Serialize};

/// Compartment table selector. Industrial and parking buildings use wider
/// limits than the generic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompartmentProfile {
    Generic,
    Parking,
    Industrial,
}

impl From<UtilizationType> for CompartmentProfile {
    fn from(ut: UtilizationType) -> Self {
        match ut.profile() {
            UtilizationProfile::Parking => CompartmentProfile::Parking,
            UtilizationProfile::Industrial => CompartmentProfile::Industrial,
            _ => CompartmentProfile::Generic,
        }
    }
}

/// Maximum compartment area in m², indexed by category 1..=4
const GENERIC: [f64; 4] = [1_600.0, 1_600.0, 1_200.0, 800.0];
const PARKING: [f64; 4] = [6_400.0, 6_400.0, 6_400.0, 3_200.0];
const INDUSTRIAL: [f64; 4] = [4_800.0, 4_800.0, 3_200.0, 2_400.0];

/// Maximum compartment area in m² for a category and profile
pub fn compartment_limit(category: RiskCategory, profile: CompartmentProfile) -> f64 {
    let row = match profile {
        CompartmentProfile::Generic => &GENERIC,
        CompartmentProfile::Parking => &PARKING,
        CompartmentProfile::Industrial => &INDUSTRIAL,
    };
    row[usize::from(category.ordinal()) - 1]
}

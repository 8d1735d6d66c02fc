use crate::errors::{ensure_non_negative, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary use of a building, as enumerated by the regulation ("utilização-tipo").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UtilizationType {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
    XI,
    XII,
}

impl UtilizationType {
    pub const ALL: [UtilizationType; 12] = [
        UtilizationType::I,
        UtilizationType::II,
        UtilizationType::III,
        UtilizationType::IV,
        UtilizationType::V,
        UtilizationType::VI,
        UtilizationType::VII,
        UtilizationType::VIII,
        UtilizationType::IX,
        UtilizationType::X,
        UtilizationType::XI,
        UtilizationType::XII,
    ];

    /// Roman-numeral tag used in stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            UtilizationType::I => "I",
            UtilizationType::II => "II",
            UtilizationType::III => "III",
            UtilizationType::IV => "IV",
            UtilizationType::V => "V",
            UtilizationType::VI => "VI",
            UtilizationType::VII => "VII",
            UtilizationType::VIII => "VIII",
            UtilizationType::IX => "IX",
            UtilizationType::X => "X",
            UtilizationType::XI => "XI",
            UtilizationType::XII => "XII",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            UtilizationType::I => "Habitacionais",
            UtilizationType::II => "Estacionamentos",
            UtilizationType::III => "Administrativos",
            UtilizationType::IV => "Escolares",
            UtilizationType::V => "Hospitalares",
            UtilizationType::VI => "Espetáculos",
            UtilizationType::VII => "Hoteleiros",
            UtilizationType::VIII => "Comerciais",
            UtilizationType::IX => "Desportivos",
            UtilizationType::X => "Museus",
            UtilizationType::XI => "Bibliotecas",
            UtilizationType::XII => "Industriais",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UtilizationType::I => "Edifícios de habitação unifamiliar ou multifamiliar.",
            UtilizationType::II => "Parques de estacionamento cobertos ou ao ar livre.",
            UtilizationType::III => "Escritórios, repartições públicas, bancos.",
            UtilizationType::IV => "Escolas, creches, centros de formação.",
            UtilizationType::V => "Hospitais, clínicas, lares de idosos.",
            UtilizationType::VI => "Teatros, cinemas, auditórios, templos.",
            UtilizationType::VII => "Hotéis, alojamento local, restauração.",
            UtilizationType::VIII => "Lojas, centros comerciais, gares.",
            UtilizationType::IX => "Pavilhões, estádios, piscinas.",
            UtilizationType::X => "Museus, galerias de arte.",
            UtilizationType::XI => "Bibliotecas e arquivos.",
            UtilizationType::XII => "Indústrias, oficinas, armazéns.",
        }
    }

    /// Threshold-table profile this type is classified against
    pub fn profile(&self) -> UtilizationProfile {
        match self {
            UtilizationType::I => UtilizationProfile::Residential,
            UtilizationType::II => UtilizationProfile::Parking,
            UtilizationType::III => UtilizationProfile::Administrative,
            UtilizationType::IV
            | UtilizationType::V
            | UtilizationType::VII
            | UtilizationType::X
            | UtilizationType::XI => UtilizationProfile::Institutional,
            UtilizationType::VI | UtilizationType::IX => UtilizationProfile::Assembly,
            UtilizationType::VIII => UtilizationProfile::Retail,
            UtilizationType::XII => UtilizationProfile::Industrial,
        }
    }

    /// Building fields the collaborator form should ask for this type.
    pub fn classification_factors(&self) -> &'static [ClassificationFactor] {
        use ClassificationFactor::*;
        match self {
            UtilizationType::I => &[Height, BelowGradeFloors],
            UtilizationType::II | UtilizationType::VIII => &[Height, GrossArea, BelowGradeFloors],
            UtilizationType::VI | UtilizationType::IX => &[Height, Occupancy, BelowGradeFloors],
            UtilizationType::XII => &[Height, GrossArea],
            UtilizationType::III
            | UtilizationType::IV
            | UtilizationType::V
            | UtilizationType::VII
            | UtilizationType::X
            | UtilizationType::XI => &[Height, Occupancy],
        }
    }
}

impl fmt::Display for UtilizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UtilizationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        UtilizationType::ALL
            .into_iter()
            .find(|ut| ut.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_tag("utilization type", s))
    }
}

/// Group of utilization types sharing one category threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationProfile {
    Residential,
    Parking,
    Administrative,
    /// Schools, hospitals, hotels, museums and libraries
    Institutional,
    /// Theatres and sports venues
    Assembly,
    Retail,
    Industrial,
}

/// Building field taking part in category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationFactor {
    Height,
    GrossArea,
    Occupancy,
    BelowGradeFloors,
}

impl ClassificationFactor {
    pub fn label(&self) -> &'static str {
        match self {
            ClassificationFactor::Height => "Altura",
            ClassificationFactor::GrossArea => "Área bruta",
            ClassificationFactor::Occupancy => "Efetivo",
            ClassificationFactor::BelowGradeFloors => "Pisos abaixo do plano de referência",
        }
    }
}

/// Building-level risk category, 1 (reduced) to 4 (very high).
///
/// Serialized as its ordinal so stored records keep the plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RiskCategory {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl RiskCategory {
    /// Categories in increasing severity
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::One,
        RiskCategory::Two,
        RiskCategory::Three,
        RiskCategory::Four,
    ];

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(value: u8) -> Option<Self> {
        RiskCategory::ALL.into_iter().find(|c| c.ordinal() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::One => "Risco Reduzido",
            RiskCategory::Two => "Risco Moderado",
            RiskCategory::Three => "Risco Elevado",
            RiskCategory::Four => "Risco Muito Elevado",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ª Categoria", self.ordinal())
    }
}

impl From<RiskCategory> for u8 {
    fn from(category: RiskCategory) -> u8 {
        category.ordinal()
    }
}

impl TryFrom<u8> for RiskCategory {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        RiskCategory::from_ordinal(value)
            .ok_or_else(|| Error::unknown_tag("risk category", value.to_string()))
    }
}

/// Declared characteristics of the building as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDescriptor {
    pub utilization_type: UtilizationType,
    /// Height in meters
    pub height: f64,
    /// Gross area in m²
    pub gross_area: f64,
    pub occupancy: u32,
    pub below_grade_floors: u32,
    #[serde(default)]
    pub has_sleeping_area: bool,
    #[serde(default)]
    pub has_bedridden_occupants: bool,
}

impl BuildingDescriptor {
    pub fn new(utilization_type: UtilizationType) -> Self {
        Self {
            utilization_type,
            height: 0.0,
            gross_area: 0.0,
            occupancy: 0,
            below_grade_floors: 0,
            has_sleeping_area: false,
            has_bedridden_occupants: false,
        }
    }

    /// Caller-side check that the real-valued fields are usable.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("height", self.height)?;
        ensure_non_negative("gross_area", self.gross_area)
    }
}

impl Default for BuildingDescriptor {
    fn default() -> Self {
        Self::new(UtilizationType::III)
    }
}

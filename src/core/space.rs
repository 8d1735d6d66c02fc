use crate::errors::{ensure_non_negative, Result};
use crate::risk::{classify_space_risk, RiskInputs};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned opaque identifier of a space
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(pub String);

impl SpaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SpaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Functional type of a space.
///
/// The known vocabulary is enumerated; any other tag is preserved verbatim in
/// `Other` so records written by newer collaborators survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpaceType {
    Office,
    MeetingRoom,
    Classroom,
    Atrium,
    Retail,
    Restaurant,
    Auditorium,
    Library,
    Archive,
    Gym,
    Dormitory,
    Lounge,
    Ward,
    ConsultingRoom,
    Kitchen,
    Laundry,
    Warehouse,
    Workshop,
    Laboratory,
    Garage,
    Toilets,
    TechnicalRoom,
    EnergyRoom,
    RackRoom,
    Maintenance,
    SecurityPost,
    ControlCentre,
    BoilerRoom,
    Generator,
    Transformer,
    WasteRoom,
    Stage,
    Circulation,
    Other(String),
}

impl SpaceType {
    /// Every enumerated type, in vocabulary order
    pub const KNOWN: [SpaceType; 33] = [
        SpaceType::Office,
        SpaceType::MeetingRoom,
        SpaceType::Classroom,
        SpaceType::Atrium,
        SpaceType::Retail,
        SpaceType::Restaurant,
        SpaceType::Auditorium,
        SpaceType::Library,
        SpaceType::Archive,
        SpaceType::Gym,
        SpaceType::Dormitory,
        SpaceType::Lounge,
        SpaceType::Ward,
        SpaceType::ConsultingRoom,
        SpaceType::Kitchen,
        SpaceType::Laundry,
        SpaceType::Warehouse,
        SpaceType::Workshop,
        SpaceType::Laboratory,
        SpaceType::Garage,
        SpaceType::Toilets,
        SpaceType::TechnicalRoom,
        SpaceType::EnergyRoom,
        SpaceType::RackRoom,
        SpaceType::Maintenance,
        SpaceType::SecurityPost,
        SpaceType::ControlCentre,
        SpaceType::BoilerRoom,
        SpaceType::Generator,
        SpaceType::Transformer,
        SpaceType::WasteRoom,
        SpaceType::Stage,
        SpaceType::Circulation,
    ];

    /// Stored tag
    pub fn as_str(&self) -> &str {
        match self {
            SpaceType::Office => "escritorio",
            SpaceType::MeetingRoom => "reuniao",
            SpaceType::Classroom => "sala_aula",
            SpaceType::Atrium => "atrio",
            SpaceType::Retail => "comercio",
            SpaceType::Restaurant => "restaurante",
            SpaceType::Auditorium => "auditorio",
            SpaceType::Library => "biblioteca",
            SpaceType::Archive => "arquivo",
            SpaceType::Gym => "ginasio",
            SpaceType::Dormitory => "dormitorio",
            SpaceType::Lounge => "sala_estar",
            SpaceType::Ward => "enfermaria",
            SpaceType::ConsultingRoom => "consultorio",
            SpaceType::Kitchen => "cozinha",
            SpaceType::Laundry => "lavandaria",
            SpaceType::Warehouse => "armazem",
            SpaceType::Workshop => "oficina",
            SpaceType::Laboratory => "laboratorio",
            SpaceType::Garage => "garagem",
            SpaceType::Toilets => "sanitarios",
            SpaceType::TechnicalRoom => "tecnico",
            SpaceType::EnergyRoom => "energia",
            SpaceType::RackRoom => "bastidor",
            SpaceType::Maintenance => "manutencao",
            SpaceType::SecurityPost => "posto_seguranca",
            SpaceType::ControlCentre => "centro_controlo",
            SpaceType::BoilerRoom => "central_termica",
            SpaceType::Generator => "gerador",
            SpaceType::Transformer => "transformador",
            SpaceType::WasteRoom => "lixos",
            SpaceType::Stage => "palco",
            SpaceType::Circulation => "circulacao",
            SpaceType::Other(tag) => tag,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        SpaceType::KNOWN
            .iter()
            .find(|known| known.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| SpaceType::Other(tag.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SpaceType::Other(_))
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SpaceType {
    fn from(tag: String) -> Self {
        SpaceType::from_tag(&tag)
    }
}

impl From<&str> for SpaceType {
    fn from(tag: &str) -> Self {
        SpaceType::from_tag(tag)
    }
}

impl From<SpaceType> for String {
    fn from(space_type: SpaceType) -> String {
        match space_type {
            SpaceType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Risk class of a single space ("local de risco").
///
/// The derived ordering A < B < ... < F is a severity ordering used for
/// worst-of aggregation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskClass {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl RiskClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::A => "A",
            RiskClass::B => "B",
            RiskClass::C => "C",
            RiskClass::D => "D",
            RiskClass::E => "E",
            RiskClass::F => "F",
        }
    }

    /// Most severe class of a collection, `None` when empty
    pub fn worst_of(classes: impl IntoIterator<Item = RiskClass>) -> Option<RiskClass> {
        classes.into_iter().max()
    }

    /// Classes D and E host occupants with reduced mobility or asleep
    pub fn is_high_occupant_risk(&self) -> bool {
        matches!(self, RiskClass::D | RiskClass::E)
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupant and hazard flags declared for a space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskFlags {
    #[serde(default)]
    pub bedridden: bool,
    #[serde(default)]
    pub sleeping: bool,
    #[serde(default)]
    pub aggravated: bool,
}

/// A room or zone of the building.
///
/// `risk_class` is derived from the type, occupancy and flags; every
/// constructor and mutator here recomputes it, and callers editing the
/// public fields directly must call [`Space::reclassify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
    pub space_type: SpaceType,
    /// Floor area in m²
    pub area: f64,
    /// Ceiling height in meters
    #[serde(default)]
    pub height: Option<f64>,
    pub occupancy: u32,
    /// Installed thermal or electrical power in kW
    #[serde(default)]
    pub power: Option<f64>,
    /// Fire load density in MJ/m²
    #[serde(default)]
    pub fire_load: Option<f64>,
    #[serde(default)]
    pub flags: RiskFlags,
    pub risk_class: RiskClass,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub has_sub_compartmentation: bool,
}

impl Space {
    pub fn new(
        id: impl Into<SpaceId>,
        name: impl Into<String>,
        space_type: impl Into<SpaceType>,
        area: f64,
        occupancy: u32,
    ) -> Self {
        let mut space = Self {
            id: id.into(),
            name: name.into(),
            space_type: space_type.into(),
            area,
            height: None,
            occupancy,
            power: None,
            fire_load: None,
            flags: RiskFlags::default(),
            risk_class: RiskClass::A,
            notes: String::new(),
            has_sub_compartmentation: false,
        };
        space.reclassify();
        space
    }

    pub fn with_flags(mut self, flags: RiskFlags) -> Self {
        self.flags = flags;
        self.reclassify();
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_power(mut self, power_kw: f64) -> Self {
        self.power = Some(power_kw);
        self
    }

    pub fn with_fire_load(mut self, fire_load: f64) -> Self {
        self.fire_load = Some(fire_load);
        self
    }

    pub fn with_sub_compartmentation(mut self, subdivided: bool) -> Self {
        self.has_sub_compartmentation = subdivided;
        self
    }

    /// Inputs of the risk cascade for this space
    pub fn risk_inputs(&self) -> RiskInputs<'_> {
        RiskInputs {
            occupancy: self.occupancy,
            bedridden: self.flags.bedridden,
            sleeping: self.flags.sleeping,
            aggravated: self.flags.aggravated,
            space_type: &self.space_type,
        }
    }

    /// Recompute the derived risk class and the automatic notes
    pub fn reclassify(&mut self) {
        let inputs = self.risk_inputs();
        let class = classify_space_risk(&inputs);
        let notes = crate::risk::automatic_notes(&inputs, class).join(", ");
        self.risk_class = class;
        self.notes = notes;
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("area", self.area)?;
        for (field, value) in [
            ("height", self.height),
            ("power", self.power),
            ("fire_load", self.fire_load),
        ] {
            if let Some(value) = value {
                ensure_non_negative(field, value)?;
            }
        }
        Ok(())
    }
}

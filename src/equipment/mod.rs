//! Equipment quantity estimation per space.
//!
//! Every equipment category has its own small decision table in [`rules`],
//! keyed first on the space type and then on area, occupancy or installed
//! power. Area-based counts are `max(1, ceil(area / divisor))`, so a category
//! that applies never yields zero units.

pub mod rules;

use crate::core::Space;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    #[serde(rename = "extintores")]
    PortableExtinguishers,
    #[serde(rename = "portas")]
    Doors,
    #[serde(rename = "detecao")]
    Detection,
    #[serde(rename = "extincao")]
    FixedSuppression,
    #[serde(rename = "sinalizacao")]
    Signage,
}

impl EquipmentCategory {
    pub const ALL: [EquipmentCategory; 5] = [
        EquipmentCategory::PortableExtinguishers,
        EquipmentCategory::Doors,
        EquipmentCategory::Detection,
        EquipmentCategory::FixedSuppression,
        EquipmentCategory::Signage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCategory::PortableExtinguishers => "extintores",
            EquipmentCategory::Doors => "portas",
            EquipmentCategory::Detection => "detecao",
            EquipmentCategory::FixedSuppression => "extincao",
            EquipmentCategory::Signage => "sinalizacao",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentCategory::PortableExtinguishers => "Meios de primeira intervenção",
            EquipmentCategory::Doors => "Portas e vãos",
            EquipmentCategory::Detection => "Deteção e alarme",
            EquipmentCategory::FixedSuppression => "Extinção automática",
            EquipmentCategory::Signage => "Sinalização e iluminação de emergência",
        }
    }
}

impl FromStr for EquipmentCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EquipmentCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::unknown_tag("equipment category", s))
    }
}

/// Estimated quantity. Some outcomes are requirements rather than counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Count(u32),
    Required,
    NotApplicable,
    DedicatedStudy,
}

impl Quantity {
    pub fn count(&self) -> Option<u32> {
        match self {
            Quantity::Count(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::Required => f.write_str("Obrigatório"),
            Quantity::NotApplicable => f.write_str("N/A"),
            Quantity::DedicatedStudy => f.write_str("Estudo específico"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEstimate {
    pub name: String,
    pub quantity: Quantity,
    pub unit: String,
    /// Short justification printed next to the quantity in reports
    pub rationale: String,
}

impl EquipmentEstimate {
    pub(crate) fn new(
        name: impl Into<String>,
        quantity: Quantity,
        unit: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            rationale: rationale.into(),
        }
    }

    pub(crate) fn units(name: impl Into<String>, count: u32, rationale: impl Into<String>) -> Self {
        Self::new(name, Quantity::Count(count), "un.", rationale)
    }
}

/// Ordered estimates for one space and one equipment category
pub fn estimate_equipment(space: &Space, category: EquipmentCategory) -> Vec<EquipmentEstimate> {
    let estimates = match category {
        EquipmentCategory::PortableExtinguishers => rules::portable_extinguishers(space),
        EquipmentCategory::Doors => rules::doors(space),
        EquipmentCategory::Detection => rules::detection(space),
        EquipmentCategory::FixedSuppression => rules::fixed_suppression(space),
        EquipmentCategory::Signage => rules::signage(space),
    };
    trace!(
        space = %space.id,
        category = category.as_str(),
        items = estimates.len(),
        "Estimated equipment"
    );
    estimates
}

/// Estimates for one space across all equipment categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceEquipment {
    pub category: EquipmentCategory,
    pub items: Vec<EquipmentEstimate>,
}

pub fn estimate_all(space: &Space) -> Vec<SpaceEquipment> {
    EquipmentCategory::ALL
        .into_iter()
        .map(|category| SpaceEquipment {
            category,
            items: estimate_equipment(space, category),
        })
        .collect()
}

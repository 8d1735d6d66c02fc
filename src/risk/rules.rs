//! Ordered rule list of the space risk cascade.
//!
//! Order is part of the contract: an aggravated, bedridden boiler room must
//! resolve to F through the first rule, never to D.

use super::RiskInputs;
use crate::core::{RiskClass, SpaceType};

/// One row of the cascade
pub struct CascadeRule {
    pub name: &'static str,
    pub predicate: fn(&RiskInputs<'_>) -> bool,
    pub class: RiskClass,
}

impl std::fmt::Debug for CascadeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CascadeRule")
            .field("name", &self.name)
            .field("class", &self.class)
            .finish()
    }
}

/// Control and hazardous technical rooms
pub const CRITICAL_TECHNICAL_TYPES: &[SpaceType] = &[
    SpaceType::SecurityPost,
    SpaceType::ControlCentre,
    SpaceType::BoilerRoom,
    SpaceType::Generator,
    SpaceType::Transformer,
];

/// Technical rooms escalated to F only when flagged aggravated
pub const TECHNICAL_ADJACENT_TYPES: &[SpaceType] = &[
    SpaceType::TechnicalRoom,
    SpaceType::EnergyRoom,
    SpaceType::RackRoom,
    SpaceType::WasteRoom,
    SpaceType::Maintenance,
];

/// Spaces open to the public or holding a significant fire load
pub const PUBLIC_FIRE_LOAD_TYPES: &[SpaceType] = &[
    SpaceType::Kitchen,
    SpaceType::Archive,
    SpaceType::Warehouse,
    SpaceType::Auditorium,
    SpaceType::Retail,
    SpaceType::Library,
    SpaceType::Workshop,
    SpaceType::Laboratory,
    SpaceType::Stage,
    SpaceType::WasteRoom,
    SpaceType::Restaurant,
    SpaceType::Laundry,
];

pub(super) const DEFAULT_RULE: CascadeRule = CascadeRule {
    name: "default",
    predicate: |_| true,
    class: RiskClass::A,
};

pub const CASCADE: &[CascadeRule] = &[
    CascadeRule {
        name: "critical_technical",
        predicate: |i| CRITICAL_TECHNICAL_TYPES.contains(i.space_type),
        class: RiskClass::F,
    },
    CascadeRule {
        name: "aggravated_technical",
        predicate: |i| i.aggravated && TECHNICAL_ADJACENT_TYPES.contains(i.space_type),
        class: RiskClass::F,
    },
    CascadeRule {
        name: "bedridden",
        predicate: |i| i.bedridden,
        class: RiskClass::D,
    },
    CascadeRule {
        name: "sleeping",
        predicate: |i| i.sleeping,
        class: RiskClass::E,
    },
    CascadeRule {
        name: "public_or_fire_load",
        predicate: |i| PUBLIC_FIRE_LOAD_TYPES.contains(i.space_type),
        class: RiskClass::C,
    },
    CascadeRule {
        name: "aggravated",
        predicate: |i| i.aggravated,
        class: RiskClass::C,
    },
    CascadeRule {
        name: "occupancy_over_200",
        predicate: |i| i.occupancy > 200,
        class: RiskClass::C,
    },
    CascadeRule {
        name: "occupancy_over_100",
        predicate: |i| i.occupancy > 100,
        class: RiskClass::B,
    },
    DEFAULT_RULE,
];

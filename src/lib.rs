//! Fire-safety compliance engine for buildings under the Portuguese SCIE
//! regulation.
//!
//! Every component is a pure function over plain records: building risk
//! category, space risk class, compartment size, evacuation distances,
//! exit widths, smoke control sizing, equipment quantities and requirement
//! text. [`assessment::assess`] ties them together for a whole project.

// Export modules for library usage
pub mod assessment;
pub mod category;
pub mod compartment;
pub mod config;
pub mod core;
pub mod equipment;
pub mod errors;
pub mod evacuation;
pub mod occupancy;
pub mod requirements;
pub mod risk;
pub mod smoke;
pub mod thresholds;

// Re-export commonly used types
pub use crate::core::{
    BuildingDescriptor, RiskCategory, RiskClass, RiskFlags, Space, SpaceId, SpaceType,
    UtilizationType,
};

pub use crate::errors::{Error, Result};

pub use crate::category::{classify_building, explain_category, CategoryExplanation};

pub use crate::risk::{automatic_notes, classify_space_risk, RiskInputs};

pub use crate::compartment::{
    validate_compartment, CompartmentCheck, CompartmentPolicy, CompartmentVerdict,
};

pub use crate::evacuation::{
    check_distance, compute_width, ComplianceOverride, ComplianceStatus, EvacuationPath,
    PathConfiguration, PathKind, WidthCalculation, WidthRequirement,
};

pub use crate::smoke::{
    size_canton, size_ratio_based, CantonRequest, CantonResult, CantonRiskClass, RatioRequest,
    RatioResult, SmokeCalculation, SmokeResult, SmokeZoneType, Ventilation,
};

pub use crate::equipment::{estimate_equipment, EquipmentCategory, EquipmentEstimate, Quantity};

pub use crate::requirements::{technical_requirements, RequirementChapter, TechnicalRequirement};

pub use crate::occupancy::suggest_occupancy;

pub use crate::assessment::{assess, ProjectAssessment, ProjectSnapshot};

pub use crate::config::{load_config_from_path, parse_config, ConfigPreset, EngineConfig};

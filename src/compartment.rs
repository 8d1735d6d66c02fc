//! Fire compartment size check.
//!
//! The check itself only reports whether a space exceeds the maximum
//! compartment area. What to do about an exceeded compartment that declares
//! internal sub-compartmentation is a caller policy, see [`CompartmentPolicy`].

use crate::core::{RiskCategory, Space, SpaceId, UtilizationType};
use crate::thresholds::{compartment_limit, CompartmentProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompartmentCheck {
    pub max_allowed_area: f64,
    pub area: f64,
    pub exceeds: bool,
    pub has_sub_compartmentation: bool,
}

/// How an exceeded but subdivided compartment is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompartmentPolicy {
    /// Warn and accept the declared sub-compartmentation
    #[default]
    Warn,
    /// Reject regardless of sub-compartmentation
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompartmentVerdict {
    Accepted,
    Warning,
    Blocked,
}

impl fmt::Display for CompartmentVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompartmentVerdict::Accepted => "Dentro do limite",
            CompartmentVerdict::Warning => "Excede o limite (subcompartimentado)",
            CompartmentVerdict::Blocked => "Excede o limite",
        })
    }
}

impl CompartmentCheck {
    pub fn verdict(&self, policy: CompartmentPolicy) -> CompartmentVerdict {
        match (self.exceeds, self.has_sub_compartmentation, policy) {
            (false, _, _) => CompartmentVerdict::Accepted,
            (true, true, CompartmentPolicy::Warn) => CompartmentVerdict::Warning,
            (true, _, _) => CompartmentVerdict::Blocked,
        }
    }
}

/// Compare a space area against the maximum compartment area
pub fn validate_compartment(
    category: RiskCategory,
    utilization_type: UtilizationType,
    area: f64,
    has_sub_compartmentation: bool,
) -> CompartmentCheck {
    let profile = CompartmentProfile::from(utilization_type);
    let max_allowed_area = compartment_limit(category, profile);
    let check = CompartmentCheck {
        max_allowed_area,
        area,
        exceeds: area > max_allowed_area,
        has_sub_compartmentation,
    };
    debug!(
        category = category.ordinal(),
        utilization = utilization_type.as_str(),
        area,
        max = max_allowed_area,
        exceeds = check.exceeds,
        "Checked compartment size"
    );
    check
}

/// Compartment outcome for one space of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceCompartment {
    pub space_id: SpaceId,
    pub check: CompartmentCheck,
    pub verdict: CompartmentVerdict,
}

impl SpaceCompartment {
    pub fn evaluate(
        space: &Space,
        category: RiskCategory,
        utilization_type: UtilizationType,
        policy: CompartmentPolicy,
    ) -> Self {
        let check = validate_compartment(
            category,
            utilization_type,
            space.area,
            space.has_sub_compartmentation,
        );
        Self {
            space_id: space.id.clone(),
            verdict: check.verdict(policy),
            check,
        }
    }
}

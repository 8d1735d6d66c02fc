//! Evacuation distance validation.
//!
//! A path's allowed distance depends on where it runs, whether it is a dead
//! end, and whether it serves risk D/E occupants. Compliance computed from
//! the regulation and compliance forced by hand are stored side by side so
//! reports can tell them apart.

use crate::core::{Space, SpaceId};
use crate::errors::{Error, Result};
use crate::thresholds::distance_limit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Where the path runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// Inside the room occupants start from
    #[serde(rename = "local")]
    Local,
    /// Along an interior horizontal escape route
    #[serde(rename = "interior")]
    InteriorRoute,
    /// Along an exterior horizontal escape route
    #[serde(rename = "exterior")]
    ExteriorRoute,
}

impl PathKind {
    pub const ALL: [PathKind; 3] = [
        PathKind::Local,
        PathKind::InteriorRoute,
        PathKind::ExteriorRoute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathKind::Local => "local",
            PathKind::InteriorRoute => "interior",
            PathKind::ExteriorRoute => "exterior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PathKind::Local => "Local Permanência",
            PathKind::InteriorRoute => "Via Interior",
            PathKind::ExteriorRoute => "Via Exterior",
        }
    }
}

impl FromStr for PathKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PathKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::unknown_tag("path kind", s))
    }
}

/// Whether the path has one or several independent ways out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathConfiguration {
    #[serde(rename = "impasse")]
    DeadEnd,
    #[serde(rename = "distinct")]
    DistinctExits,
}

impl PathConfiguration {
    pub const ALL: [PathConfiguration; 2] = [
        PathConfiguration::DeadEnd,
        PathConfiguration::DistinctExits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathConfiguration::DeadEnd => "impasse",
            PathConfiguration::DistinctExits => "distinct",
        }
    }
}

impl FromStr for PathConfiguration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PathConfiguration::ALL
            .into_iter()
            .find(|configuration| configuration.as_str() == s)
            .ok_or_else(|| Error::unknown_tag("path configuration", s))
    }
}

/// Regulation outcome for one measured distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceCheck {
    pub max_allowed_distance: f64,
    pub computed_compliant: bool,
}

/// Check a measured distance against the limit for its situation
pub fn check_distance(
    kind: PathKind,
    configuration: PathConfiguration,
    serves_high_risk: bool,
    measured_distance: f64,
) -> DistanceCheck {
    let max_allowed_distance = distance_limit(kind, configuration, serves_high_risk);
    DistanceCheck {
        max_allowed_distance,
        computed_compliant: measured_distance <= max_allowed_distance,
    }
}

/// Manual compliance decision recorded against a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceOverride {
    pub compliant: bool,
}

impl ComplianceOverride {
    /// Recover an override from a record that stored only the effective
    /// flag: the flag differing from the regulation outcome is the only
    /// trace an override leaves.
    pub fn infer(
        measured_distance: f64,
        max_allowed_distance: f64,
        stored_compliant: bool,
    ) -> Option<Self> {
        let computed = measured_distance <= max_allowed_distance;
        (computed != stored_compliant).then_some(Self {
            compliant: stored_compliant,
        })
    }
}

/// How a path's effective compliance was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    ManuallyAccepted,
    ManuallyRejected,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplianceStatus::Compliant => "Conforme",
            ComplianceStatus::NonCompliant => "Não conforme",
            ComplianceStatus::ManuallyAccepted => "Conforme (validação manual)",
            ComplianceStatus::ManuallyRejected => "Não conforme (validação manual)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationPath {
    pub name: String,
    pub kind: PathKind,
    pub configuration: PathConfiguration,
    pub serves_high_risk: bool,
    pub measured_distance: f64,
    pub max_allowed_distance: f64,
    pub computed_compliant: bool,
    #[serde(default)]
    pub manual_override: Option<ComplianceOverride>,
    #[serde(default)]
    pub source_space_id: Option<SpaceId>,
}

impl EvacuationPath {
    pub fn new(
        name: impl Into<String>,
        kind: PathKind,
        configuration: PathConfiguration,
        serves_high_risk: bool,
        measured_distance: f64,
    ) -> Self {
        let check = check_distance(kind, configuration, serves_high_risk, measured_distance);
        let path = Self {
            name: name.into(),
            kind,
            configuration,
            serves_high_risk,
            measured_distance,
            max_allowed_distance: check.max_allowed_distance,
            computed_compliant: check.computed_compliant,
            manual_override: None,
            source_space_id: None,
        };
        debug!(
            path = %path.name,
            kind = kind.as_str(),
            configuration = configuration.as_str(),
            measured = measured_distance,
            max = path.max_allowed_distance,
            compliant = path.computed_compliant,
            "Checked evacuation distance"
        );
        path
    }

    /// Local path leaving `space`. Risk D/E spaces tighten interior dead
    /// ends if the caller later switches the kind.
    pub fn from_space(
        space: &Space,
        configuration: PathConfiguration,
        measured_distance: f64,
    ) -> Self {
        let mut path = Self::new(
            format!("{} (Evacuação)", space.name),
            PathKind::Local,
            configuration,
            space.risk_class.is_high_occupant_risk(),
            measured_distance,
        );
        path.source_space_id = Some(space.id.clone());
        path
    }

    pub fn with_override(mut self, compliant: bool) -> Self {
        self.manual_override = Some(ComplianceOverride { compliant });
        self
    }

    pub fn clear_override(&mut self) {
        self.manual_override = None;
    }

    /// Re-derive the limit and computed flag after editing inputs. The
    /// manual override, if any, is kept.
    pub fn recompute(&mut self) {
        let check = check_distance(
            self.kind,
            self.configuration,
            self.serves_high_risk,
            self.measured_distance,
        );
        self.max_allowed_distance = check.max_allowed_distance;
        self.computed_compliant = check.computed_compliant;
    }

    pub fn is_overridden(&self) -> bool {
        self.manual_override.is_some()
    }

    /// Compliance used for decisions: the override when present, the
    /// regulation outcome otherwise
    pub fn effective_compliant(&self) -> bool {
        self.manual_override
            .map_or(self.computed_compliant, |o| o.compliant)
    }

    pub fn status(&self) -> ComplianceStatus {
        match (self.manual_override, self.computed_compliant) {
            (Some(ComplianceOverride { compliant: true }), _) => ComplianceStatus::ManuallyAccepted,
            (Some(ComplianceOverride { compliant: false }), _) => {
                ComplianceStatus::ManuallyRejected
            }
            (None, true) => ComplianceStatus::Compliant,
            (None, false) => ComplianceStatus::NonCompliant,
        }
    }
}

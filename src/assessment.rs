//! Project-level compliance summary.
//!
//! [`assess`] aggregates every component over a project snapshot: building
//! category, space risk classes, compartment verdicts under the configured
//! policy, evacuation path counts, per-chapter status and per-space
//! equipment. It is a pure aggregation and can be called as often as the
//! snapshot changes.

use crate::category::{explain_category, CategoryExplanation};
use crate::compartment::{CompartmentVerdict, SpaceCompartment};
use crate::config::EngineConfig;
use crate::core::{BuildingDescriptor, RiskCategory, RiskClass, Space, SpaceId};
use crate::equipment::{estimate_all, SpaceEquipment};
use crate::evacuation::{EvacuationPath, WidthCalculation};
use crate::occupancy::suggest_for_space;
use crate::requirements::{all_requirements, RequirementChapter, TechnicalRequirement};
use crate::smoke::SmokeCalculation;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Everything a project has recorded so far
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// `None` until the building has been described
    #[serde(default)]
    pub building: Option<BuildingDescriptor>,
    #[serde(default)]
    pub spaces: Vec<Space>,
    #[serde(default)]
    pub paths: Vec<EvacuationPath>,
    #[serde(default)]
    pub widths: Vec<WidthCalculation>,
    #[serde(default)]
    pub smoke: Vec<SmokeCalculation>,
}

/// Report modules listed on the summary dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportModule {
    Category,
    Spaces,
    Distances,
    Widths,
    Smoke,
    Technical(RequirementChapter),
}

impl ReportModule {
    /// Modules in report order
    pub fn all() -> Vec<ReportModule> {
        let mut modules = vec![
            ReportModule::Category,
            ReportModule::Spaces,
            ReportModule::Distances,
            ReportModule::Widths,
        ];
        let (before_smoke, after_smoke): (Vec<_>, Vec<_>) = RequirementChapter::ALL
            .into_iter()
            .partition(|chapter| chapter.number() < 7);
        modules.extend(before_smoke.into_iter().map(ReportModule::Technical));
        modules.push(ReportModule::Smoke);
        modules.extend(after_smoke.into_iter().map(ReportModule::Technical));
        modules
    }

    pub fn number(&self) -> u8 {
        match self {
            ReportModule::Category => 1,
            ReportModule::Spaces => 2,
            ReportModule::Distances => 3,
            ReportModule::Widths => 4,
            ReportModule::Smoke => 7,
            ReportModule::Technical(chapter) => chapter.number(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportModule::Category => "Categoria de Risco",
            ReportModule::Spaces => "Locais de Risco",
            ReportModule::Distances => "Distâncias de Evacuação",
            ReportModule::Widths => "Larguras e Saídas",
            ReportModule::Smoke => "Controlo de Fumo",
            ReportModule::Technical(chapter) => chapter.title(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    Ok,
    Error,
    Empty,
    /// Technical chapter with generated requirements to review
    Info,
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModuleStatus::Ok => "ok",
            ModuleStatus::Error => "error",
            ModuleStatus::Empty => "empty",
            ModuleStatus::Info => "info",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub module: ReportModule,
    pub status: ModuleStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathSummary {
    pub total: usize,
    pub compliant: usize,
    pub non_compliant: usize,
    pub overridden: usize,
}

impl PathSummary {
    pub fn from_paths(paths: &[EvacuationPath]) -> Self {
        paths.iter().fold(PathSummary::default(), |mut summary, path| {
            summary.total += 1;
            if path.effective_compliant() {
                summary.compliant += 1;
            } else {
                summary.non_compliant += 1;
            }
            if path.is_overridden() {
                summary.overridden += 1;
            }
            summary
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySuggestion {
    pub space_id: SpaceId,
    pub suggested: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceEquipmentReport {
    pub space_id: SpaceId,
    pub groups: Vec<SpaceEquipment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectAssessment {
    pub category: Option<CategoryExplanation>,
    pub worst_risk_class: Option<RiskClass>,
    /// Spaces classified above risk class A
    pub aggravated_spaces: usize,
    pub compartments: Vec<SpaceCompartment>,
    pub paths: PathSummary,
    pub modules: Vec<ModuleSummary>,
    pub occupancy_suggestions: Vec<OccupancySuggestion>,
    pub equipment: Vec<SpaceEquipmentReport>,
    pub requirements: Vec<(RequirementChapter, Vec<TechnicalRequirement>)>,
}

impl ProjectAssessment {
    pub fn risk_category(&self) -> Option<RiskCategory> {
        self.category
            .as_ref()
            .map(|explanation| explanation.category)
    }

    pub fn status_of(&self, module: ReportModule) -> Option<ModuleStatus> {
        self.modules
            .iter()
            .find(|summary| summary.module == module)
            .map(|summary| summary.status)
    }

    pub fn blocked_compartments(&self) -> impl Iterator<Item = &SpaceCompartment> {
        self.compartments
            .iter()
            .filter(|outcome| outcome.verdict == CompartmentVerdict::Blocked)
    }

    /// True when no module is in error and no compartment is blocked
    pub fn is_compliant(&self) -> bool {
        self.modules.iter().all(|m| m.status != ModuleStatus::Error)
            && self.blocked_compartments().next().is_none()
    }
}

fn presence(non_empty: bool) -> ModuleStatus {
    if non_empty {
        ModuleStatus::Ok
    } else {
        ModuleStatus::Empty
    }
}

fn module_status(
    module: ReportModule,
    snapshot: &ProjectSnapshot,
    category: Option<RiskCategory>,
    paths: &PathSummary,
) -> ModuleStatus {
    match module {
        ReportModule::Category => presence(category.is_some()),
        ReportModule::Spaces => presence(!snapshot.spaces.is_empty()),
        ReportModule::Distances if paths.total == 0 => ModuleStatus::Empty,
        ReportModule::Distances if paths.non_compliant > 0 => ModuleStatus::Error,
        ReportModule::Distances => ModuleStatus::Ok,
        ReportModule::Widths => presence(!snapshot.widths.is_empty()),
        ReportModule::Smoke => presence(!snapshot.smoke.is_empty()),
        ReportModule::Technical(_) if category.is_some() => ModuleStatus::Info,
        ReportModule::Technical(_) => ModuleStatus::Empty,
    }
}

fn compartment_outcomes(
    snapshot: &ProjectSnapshot,
    building: &BuildingDescriptor,
    category: RiskCategory,
    config: &EngineConfig,
) -> Vec<SpaceCompartment> {
    let policy = config.compartment.policy;
    snapshot
        .spaces
        .iter()
        .map(|space| {
            let outcome =
                SpaceCompartment::evaluate(space, category, building.utilization_type, policy);
            if outcome.verdict == CompartmentVerdict::Blocked {
                warn!(
                    space = %space.id,
                    area = space.area,
                    max = outcome.check.max_allowed_area,
                    "Compartment exceeds the maximum area"
                );
            }
            outcome
        })
        .collect()
}

/// Assess a project snapshot
pub fn assess(snapshot: &ProjectSnapshot, config: &EngineConfig) -> ProjectAssessment {
    let category = snapshot.building.as_ref().map(explain_category);
    let risk_category = category.as_ref().map(|explanation| explanation.category);

    let compartments = match (&snapshot.building, risk_category) {
        (Some(building), Some(category)) => {
            compartment_outcomes(snapshot, building, category, config)
        }
        _ => Vec::new(),
    };

    let paths = PathSummary::from_paths(&snapshot.paths);
    let modules = ReportModule::all()
        .into_iter()
        .map(|module| ModuleSummary {
            module,
            status: module_status(module, snapshot, risk_category, &paths),
        })
        .collect();

    let occupancy_suggestions = if config.occupancy.suggest {
        snapshot
            .spaces
            .iter()
            .filter_map(|space| {
                suggest_for_space(space).map(|suggested| OccupancySuggestion {
                    space_id: space.id.clone(),
                    suggested,
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    let equipment = snapshot
        .spaces
        .par_iter()
        .map(|space| SpaceEquipmentReport {
            space_id: space.id.clone(),
            groups: estimate_all(space),
        })
        .collect();

    let requirements = match (&snapshot.building, risk_category) {
        (Some(building), Some(category)) => all_requirements(category, building),
        _ => Vec::new(),
    };

    let assessment = ProjectAssessment {
        category,
        worst_risk_class: RiskClass::worst_of(snapshot.spaces.iter().map(|s| s.risk_class)),
        aggravated_spaces: snapshot
            .spaces
            .iter()
            .filter(|s| s.risk_class != RiskClass::A)
            .count(),
        compartments,
        paths,
        modules,
        occupancy_suggestions,
        equipment,
        requirements,
    };
    debug!(
        category = ?assessment.risk_category().map(|c| c.ordinal()),
        spaces = snapshot.spaces.len(),
        paths = assessment.paths.total,
        non_compliant_paths = assessment.paths.non_compliant,
        "Assessed project"
    );
    assessment
}

//! Space risk classification.
//!
//! A space's risk class is decided by a priority cascade: an ordered list of
//! rules evaluated top to bottom where the first matching rule wins. The
//! rule list lives in [`rules::CASCADE`] so its order can be inspected and
//! tested row by row.

pub mod rules;

pub use rules::{CascadeRule, CASCADE};

use crate::core::{RiskClass, SpaceType};
use tracing::trace;

/// Everything the cascade looks at for one space
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs<'a> {
    pub occupancy: u32,
    pub bedridden: bool,
    pub sleeping: bool,
    pub aggravated: bool,
    pub space_type: &'a SpaceType,
}

/// First rule of the cascade admitting `inputs`.
///
/// The last rule is unconditional, so a rule is always found.
pub fn matching_rule(inputs: &RiskInputs<'_>) -> &'static CascadeRule {
    let rule = CASCADE
        .iter()
        .find(|rule| (rule.predicate)(inputs))
        .unwrap_or(&rules::DEFAULT_RULE);
    trace!(
        rule = rule.name,
        class = rule.class.as_str(),
        space_type = inputs.space_type.as_str(),
        "Risk cascade matched"
    );
    rule
}

/// Classify a space into its risk class
pub fn classify_space_risk(inputs: &RiskInputs<'_>) -> RiskClass {
    matching_rule(inputs).class
}

/// Notes recorded on a space alongside its class
pub fn automatic_notes(inputs: &RiskInputs<'_>, class: RiskClass) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if inputs.bedridden {
        notes.push("Acamados");
    }
    if inputs.sleeping {
        notes.push("Dormida");
    }
    if inputs.aggravated {
        if class == RiskClass::F {
            notes.push("Risco F (Técnico/Controlo)");
        } else {
            notes.push("Risco C+ (Agravado)");
        }
    }
    notes
}

//! Evacuation checks: travel distances along escape paths and the width and
//! number of exits needed for an occupancy.

pub mod distance;
pub mod width;

pub use distance::{
    check_distance, ComplianceOverride, ComplianceStatus, DistanceCheck, EvacuationPath,
    PathConfiguration, PathKind,
};
pub use width::{compute_width, WidthCalculation, WidthRequirement, WidthSource};

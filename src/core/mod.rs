//! Data model shared by every component of the engine.
//!
//! All records are plain values owned by the caller. The engine reads them,
//! derives results and never keeps references between calls.

pub mod building;
pub mod space;

pub use building::{
    BuildingDescriptor, ClassificationFactor, RiskCategory, UtilizationProfile, UtilizationType,
};
pub use space::{RiskClass, RiskFlags, Space, SpaceId, SpaceType};

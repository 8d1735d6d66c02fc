//! Occupancy suggestion from floor area and space type.

use crate::core::{Space, SpaceType};
use crate::thresholds::occupancy_density;

/// Suggested number of occupants, `ceil(area / factor)`.
///
/// `None` when the type has no density row, has a zero factor (spaces that
/// do not count towards occupancy) or the area is not positive.
pub fn suggest_occupancy(space_type: &SpaceType, area: f64) -> Option<u32> {
    let density = occupancy_density(space_type)?;
    if density.factor <= 0.0 || area.is_nan() || area <= 0.0 {
        return None;
    }
    let people = (area / density.factor).ceil();
    people.is_finite().then_some(people as u32)
}

/// Suggestion for a space whose declared occupancy is zero
pub fn suggest_for_space(space: &Space) -> Option<u32> {
    if space.occupancy > 0 {
        return None;
    }
    suggest_occupancy(&space.space_type, space.area)
}

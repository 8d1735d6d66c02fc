//! Exit width and exit count sizing from occupancy.
//!
//! The unit-of-passage count adds one unit for occupancies from 51 to 500
//! and drops that extra unit from 501 up, so the count at 501 equals the
//! count at 500. The rule is reproduced as published.

use crate::core::{BuildingDescriptor, Space, SpaceId};
use serde::{Deserialize, Serialize};

/// Width of a single unit of passage, m
const ONE_UNIT_WIDTH: f64 = 0.9;
/// Width of two units of passage, m
const TWO_UNITS_WIDTH: f64 = 1.4;
/// Width per unit from three units up, m
const UNIT_WIDTH: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthRequirement {
    pub units_of_passage: u32,
    pub width_meters: f64,
    pub minimum_exits: u32,
}

impl WidthRequirement {
    const NONE: WidthRequirement = WidthRequirement {
        units_of_passage: 0,
        width_meters: 0.0,
        minimum_exits: 0,
    };
}

fn units_of_passage(occupancy: u32) -> u32 {
    let hundreds = occupancy.div_ceil(100);
    match occupancy {
        0..=50 => 1,
        51..=500 => hundreds + 1,
        _ => hundreds,
    }
}

fn width_for_units(units: u32) -> f64 {
    match units {
        1 => ONE_UNIT_WIDTH,
        2 => TWO_UNITS_WIDTH,
        _ => f64::from(units) * UNIT_WIDTH,
    }
}

fn minimum_exits(occupancy: u32) -> u32 {
    match occupancy {
        0..=50 => 1,
        51..=1500 => 2,
        _ => 2 + (occupancy - 1500) / 500,
    }
}

/// Units of passage, width and number of exits for an occupancy
pub fn compute_width(occupancy: u32) -> WidthRequirement {
    if occupancy == 0 {
        return WidthRequirement::NONE;
    }
    let units = units_of_passage(occupancy);
    WidthRequirement {
        units_of_passage: units,
        width_meters: width_for_units(units),
        minimum_exits: minimum_exits(occupancy),
    }
}

/// Where a width calculation took its occupancy from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "space_id")]
pub enum WidthSource {
    Manual,
    Building,
    Space(SpaceId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthCalculation {
    pub name: String,
    pub occupancy: u32,
    pub units_of_passage: u32,
    pub width_meters: f64,
    pub minimum_exits: u32,
    pub source: WidthSource,
}

impl WidthCalculation {
    fn from_requirement(name: String, occupancy: u32, source: WidthSource) -> Self {
        let requirement = compute_width(occupancy);
        Self {
            name,
            occupancy,
            units_of_passage: requirement.units_of_passage,
            width_meters: requirement.width_meters,
            minimum_exits: requirement.minimum_exits,
            source,
        }
    }

    pub fn manual(name: impl Into<String>, occupancy: u32) -> Self {
        Self::from_requirement(name.into(), occupancy, WidthSource::Manual)
    }

    /// Whole-building calculation from the declared total occupancy
    pub fn for_building(building: &BuildingDescriptor) -> Self {
        Self::from_requirement(
            "Total Edifício".to_string(),
            building.occupancy,
            WidthSource::Building,
        )
    }

    pub fn for_space(space: &Space) -> Self {
        Self::from_requirement(
            space.name.clone(),
            space.occupancy,
            WidthSource::Space(space.id.clone()),
        )
    }

    pub fn requirement(&self) -> WidthRequirement {
        WidthRequirement {
            units_of_passage: self.units_of_passage,
            width_meters: self.width_meters,
            minimum_exits: self.minimum_exits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SpaceType, UtilizationType};

    fn assert_width(occupancy: u32, units: u32, width: f64, exits: u32) {
        let req = compute_width(occupancy);
        assert_eq!(req.units_of_passage, units, "units for {occupancy}");
        assert!(
            (req.width_meters - width).abs() < 1e-9,
            "width for {occupancy}: {}",
            req.width_meters
        );
        assert_eq!(req.minimum_exits, exits, "exits for {occupancy}");
    }

    #[test]
    fn test_zero_occupancy_is_all_zero() {
        assert_eq!(compute_width(0), WidthRequirement::NONE);
    }

    #[test]
    fn test_boundaries() {
        assert_width(1, 1, 0.9, 1);
        assert_width(50, 1, 0.9, 1);
        assert_width(51, 2, 1.4, 2);
        assert_width(100, 2, 1.4, 2);
        assert_width(101, 3, 1.8, 2);
        assert_width(500, 6, 3.6, 2);
    }

    #[test]
    fn test_discontinuity_at_500_is_preserved() {
        assert_width(501, 6, 3.6, 2);
        // 600 people get the same units as 500 people
        assert_eq!(
            compute_width(600).units_of_passage,
            compute_width(500).units_of_passage
        );
        assert!(
            compute_width(401).units_of_passage > compute_width(400).units_of_passage
        );
    }

    #[test]
    fn test_exit_count_above_1500() {
        assert_eq!(compute_width(1500).minimum_exits, 2);
        assert_eq!(compute_width(1501).minimum_exits, 2);
        assert_eq!(compute_width(1999).minimum_exits, 2);
        assert_eq!(compute_width(2000).minimum_exits, 3);
        assert_eq!(compute_width(3000).minimum_exits, 5);
    }

    #[test]
    fn test_calculation_sources() {
        let mut building = BuildingDescriptor::new(UtilizationType::III);
        building.occupancy = 320;
        let total = WidthCalculation::for_building(&building);
        assert_eq!(total.name, "Total Edifício");
        assert_eq!(total.source, WidthSource::Building);
        assert_eq!(total.units_of_passage, 5);

        let space = Space::new("s1", "Auditório", SpaceType::Auditorium, 200.0, 180);
        let calc = WidthCalculation::for_space(&space);
        assert_eq!(calc.source, WidthSource::Space(SpaceId::new("s1")));
        assert_eq!(calc.requirement(), compute_width(180));
    }
}

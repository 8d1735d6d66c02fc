use crate::core::SpaceType;

/// Area covered by one portable extinguisher, m²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtinguisherRow {
    pub divisor: f64,
    pub name: &'static str,
    pub agent: &'static str,
}

pub const TECHNICAL_EXTINGUISHER: ExtinguisherRow = ExtinguisherRow {
    divisor: 50.0,
    name: "Extintor CO2 5 kg",
    agent: "CO2",
};
pub const PARKING_EXTINGUISHER: ExtinguisherRow = ExtinguisherRow {
    divisor: 150.0,
    name: "Extintor de pó químico ABC 6 kg",
    agent: "pó ABC",
};
pub const GENERIC_EXTINGUISHER: ExtinguisherRow = ExtinguisherRow {
    divisor: 200.0,
    name: "Extintor de água aditivada 6 L",
    agent: "água aditivada",
};

/// Kitchens above this area get an additional foam extinguisher, m²
pub const KITCHEN_FOAM_AREA: f64 = 20.0;
/// Technical rooms above this installed power get an additional powder extinguisher, kW
pub const TECHNICAL_POWDER_POWER: f64 = 40.0;
/// Kitchens above this installed power need automatic hood extinction, kW
pub const KITCHEN_HOOD_POWER: f64 = 20.0;

/// Types whose extinguishers are sized with the technical divisor
pub const TECHNICAL_EXTINGUISHER_TYPES: &[SpaceType] = &[
    SpaceType::TechnicalRoom,
    SpaceType::EnergyRoom,
    SpaceType::RackRoom,
    SpaceType::BoilerRoom,
    SpaceType::Generator,
    SpaceType::Transformer,
];

pub fn extinguisher_row(space_type: &SpaceType) -> ExtinguisherRow {
    if TECHNICAL_EXTINGUISHER_TYPES.contains(space_type) {
        TECHNICAL_EXTINGUISHER
    } else if *space_type == SpaceType::Garage {
        PARKING_EXTINGUISHER
    } else {
        GENERIC_EXTINGUISHER
    }
}

/// Coverage of one thermal detector, m²
pub const THERMAL_DETECTOR_COVERAGE: f64 = 30.0;
/// Coverage of one optical smoke detector, m²
pub const SMOKE_DETECTOR_COVERAGE: f64 = 60.0;
/// Atria taller than this need a dedicated detection study, m
pub const ATRIUM_STUDY_HEIGHT: f64 = 12.0;

/// Types where smoke detectors would false-alarm and heat detection is used
pub const HEAT_PRONE_TYPES: &[SpaceType] = &[
    SpaceType::Kitchen,
    SpaceType::Laundry,
    SpaceType::Garage,
    SpaceType::BoilerRoom,
    SpaceType::Generator,
    SpaceType::Workshop,
];

/// Occupancy above which doors need antipanic hardware and outward swing
pub const DOOR_OCCUPANCY_THRESHOLD: u32 = 50;

/// Area covered by one exit sign, m²
pub const EXIT_SIGN_COVERAGE: f64 = 100.0;
/// Emergency lighting switches to the dense formula above these values
pub const LIGHTING_AREA_THRESHOLD: f64 = 60.0;
pub const LIGHTING_OCCUPANCY_THRESHOLD: u32 = 50;
/// Area covered by one emergency lighting unit below and above the switch, m²
pub const LIGHTING_COVERAGE_SPARSE: f64 = 60.0;
pub const LIGHTING_COVERAGE_DENSE: f64 = 25.0;

/// Area covered by one sprinkler head, m²
pub const SPRINKLER_HEAD_COVERAGE: f64 = 12.0;
/// Storage spaces above this area or fire load need sprinklers
pub const STORAGE_SPRINKLER_AREA: f64 = 400.0;
pub const STORAGE_SPRINKLER_FIRE_LOAD: f64 = 1_000.0;

/// Area-based quantity: `max(1, ceil(area / divisor))`
pub fn area_quantity(area: f64, divisor: f64) -> u32 {
    let units = (area / divisor).ceil();
    if units.is_finite() && units > 1.0 {
        units as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_quantity_never_zero() {
        assert_eq!(area_quantity(0.0, 50.0), 1);
        assert_eq!(area_quantity(50.0, 50.0), 1);
        assert_eq!(area_quantity(50.1, 50.0), 2);
        assert_eq!(area_quantity(450.0, 200.0), 3);
    }

    #[test]
    fn test_extinguisher_divisors() {
        assert_eq!(extinguisher_row(&SpaceType::Transformer).divisor, 50.0);
        assert_eq!(extinguisher_row(&SpaceType::Garage).divisor, 150.0);
        assert_eq!(extinguisher_row(&SpaceType::Office).divisor, 200.0);
    }
}

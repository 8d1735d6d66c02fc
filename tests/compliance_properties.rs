//! Property-based tests for the compliance engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - Category classification is monotonic in every factor
//! - Category classification is bounded to 1..=4
//! - The space risk cascade gives technical rules precedence
//! - Repeated evaluation yields identical records
//! - Area-based quantities never drop to zero

use proptest::prelude::*;
use scie::classify_building;
use scie::core::{
    BuildingDescriptor, RiskCategory, RiskClass, RiskFlags, Space, SpaceType, UtilizationType,
};
use scie::equipment::{estimate_equipment, EquipmentCategory, Quantity};
use scie::evacuation::compute_width;
use scie::risk::{classify_space_risk, RiskInputs};
use scie::smoke::{
    size_canton, size_ratio_based, CantonRequest, CantonRiskClass, RatioRequest, SmokeZoneType,
    Ventilation,
};

fn utilization_type() -> impl Strategy<Value = UtilizationType> {
    prop::sample::select(UtilizationType::ALL.to_vec())
}

fn known_space_type() -> impl Strategy<Value = SpaceType> {
    prop::sample::select(SpaceType::KNOWN.to_vec())
}

fn building() -> impl Strategy<Value = BuildingDescriptor> {
    (
        utilization_type(),
        0.0f64..120.0,
        0.0f64..60_000.0,
        0u32..12_000,
        0u32..8,
    )
        .prop_map(|(ut, height, gross_area, occupancy, below)| BuildingDescriptor {
            utilization_type: ut,
            height,
            gross_area,
            occupancy,
            below_grade_floors: below,
            ..BuildingDescriptor::new(ut)
        })
}

fn flags() -> impl Strategy<Value = RiskFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(bedridden, sleeping, aggravated)| {
        RiskFlags {
            bedridden,
            sleeping,
            aggravated,
        }
    })
}

proptest! {
    /// Property: increasing any single factor never lowers the category
    #[test]
    fn prop_category_is_monotonic(
        building in building(),
        extra_height in 0.0f64..50.0,
        extra_area in 0.0f64..20_000.0,
        extra_occupancy in 0u32..5_000,
        extra_floors in 0u32..4,
    ) {
        let base = classify_building(&building);

        let taller = BuildingDescriptor {
            height: building.height + extra_height,
            ..building.clone()
        };
        let larger = BuildingDescriptor {
            gross_area: building.gross_area + extra_area,
            ..building.clone()
        };
        let fuller = BuildingDescriptor {
            occupancy: building.occupancy + extra_occupancy,
            ..building.clone()
        };
        let deeper = BuildingDescriptor {
            below_grade_floors: building.below_grade_floors + extra_floors,
            ..building.clone()
        };

        for grown in [taller, larger, fuller, deeper] {
            prop_assert!(classify_building(&grown) >= base);
        }
    }

    /// Property: every building lands in a category 1..=4
    #[test]
    fn prop_category_is_bounded(building in building()) {
        let ordinal = classify_building(&building).ordinal();
        prop_assert!((1..=4).contains(&ordinal));
    }

    /// Property: critical technical types classify as F whatever the flags
    #[test]
    fn prop_critical_technical_wins(flags in flags(), occupancy in 0u32..1_000) {
        let critical = [
            SpaceType::BoilerRoom,
            SpaceType::Generator,
            SpaceType::Transformer,
        ];
        for space_type in critical {
            let inputs = RiskInputs {
                occupancy,
                bedridden: flags.bedridden,
                sleeping: flags.sleeping,
                aggravated: flags.aggravated,
                space_type: &space_type,
            };
            prop_assert_eq!(classify_space_risk(&inputs), RiskClass::F);
        }
    }

    /// Property: bedridden occupants outside technical types give class D
    #[test]
    fn prop_bedridden_gives_d(sleeping in any::<bool>(), occupancy in 0u32..1_000) {
        let ward = SpaceType::Ward;
        let inputs = RiskInputs {
            occupancy,
            bedridden: true,
            sleeping,
            aggravated: false,
            space_type: &ward,
        };
        prop_assert_eq!(classify_space_risk(&inputs), RiskClass::D);
    }

    /// Property: evaluating the same records twice gives identical output
    #[test]
    fn prop_components_are_idempotent(
        building in building(),
        space_type in known_space_type(),
        area in 0.0f64..2_000.0,
        occupancy in 0u32..600,
        flags in flags(),
    ) {
        prop_assert_eq!(classify_building(&building), classify_building(&building));

        let space = Space::new("s", "Espaço", space_type, area, occupancy).with_flags(flags);
        let again = Space::new("s", "Espaço", space.space_type.clone(), area, occupancy)
            .with_flags(flags);
        prop_assert_eq!(&space, &again);

        for category in EquipmentCategory::ALL {
            let first = estimate_equipment(&space, category);
            prop_assert_eq!(first, estimate_equipment(&space, category));
        }
        prop_assert_eq!(compute_width(occupancy), compute_width(occupancy));
    }

    /// Property: area-based equipment counts are at least one
    #[test]
    fn prop_quantities_never_zero(space_type in known_space_type(), area in 0.0f64..5_000.0) {
        let space = Space::new("s", "Espaço", space_type, area, 10);
        for category in EquipmentCategory::ALL {
            for item in estimate_equipment(&space, category) {
                prop_assert_ne!(item.quantity, Quantity::Count(0));
            }
        }
    }

    /// Property: width grows with units of passage, exits never decrease
    #[test]
    fn prop_exit_count_is_monotonic(occupancy in 1u32..20_000) {
        let here = compute_width(occupancy);
        let next = compute_width(occupancy + 1);
        prop_assert!(next.minimum_exits >= here.minimum_exits);
        prop_assert!(here.units_of_passage >= 1);
        prop_assert!(here.width_meters >= 0.9);
    }

    /// Property: canton alpha stays within the class bounds
    #[test]
    fn prop_canton_alpha_bounded(area in 1.0f64..5_000.0, height in 0.1f64..30.0) {
        for (risk, low, high) in [
            (CantonRiskClass::Low, 0.5, 1.0),
            (CantonRiskClass::Ordinary, 1.0, 1.5),
            (CantonRiskClass::High, 1.5, 2.0),
        ] {
            let result = size_canton(&CantonRequest::new(area, height, risk));
            prop_assert!(result.alpha_percent >= low - 1e-9);
            prop_assert!(result.alpha_percent <= high + 1e-9);
            prop_assert!(result.geometric_area > result.useful_area);
        }
    }

    /// Property: natural opening area is proportional to floor area
    #[test]
    fn prop_natural_area_ratio(area in 1.0f64..10_000.0) {
        let natural = |zone| RatioRequest::new(zone, area, 3.0, Ventilation::Natural);
        let generic = size_ratio_based(&natural(SmokeZoneType::Generic));
        let stage = size_ratio_based(&natural(SmokeZoneType::Stage));
        prop_assert!((stage.useful_area - 4.0 * generic.useful_area).abs() < 1e-6);
        prop_assert!(f64::from(generic.vent_count) >= generic.useful_area);
    }
}

#[test]
fn category_four_is_the_ceiling() {
    let mut tower = BuildingDescriptor::new(UtilizationType::I);
    tower.height = 400.0;
    tower.below_grade_floors = 40;
    assert_eq!(classify_building(&tower), RiskCategory::Four);
}

// Shared fixtures for scie integration tests
#![allow(dead_code)]

use scie::core::{BuildingDescriptor, RiskFlags, Space, SpaceType, UtilizationType};
use scie::evacuation::{EvacuationPath, PathConfiguration, PathKind, WidthCalculation};
use scie::smoke::{
    CantonRequest, CantonRiskClass, RatioRequest, SmokeCalculation, SmokeZoneType, Ventilation,
};
use scie::ProjectSnapshot;
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test output, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Office building, category 2 by height
pub fn office_building() -> BuildingDescriptor {
    BuildingDescriptor {
        utilization_type: UtilizationType::III,
        height: 15.0,
        gross_area: 4_200.0,
        occupancy: 420,
        below_grade_floors: 1,
        has_sleeping_area: false,
        has_bedridden_occupants: false,
    }
}

/// Small care home, category 1
pub fn care_home() -> BuildingDescriptor {
    BuildingDescriptor {
        utilization_type: UtilizationType::V,
        height: 6.0,
        gross_area: 900.0,
        occupancy: 60,
        below_grade_floors: 0,
        has_sleeping_area: true,
        has_bedridden_occupants: true,
    }
}

pub fn office_spaces() -> Vec<Space> {
    vec![
        Space::new("esc-1", "Escritório Piso 1", SpaceType::Office, 320.0, 32),
        Space::new("reu-1", "Reuniões", SpaceType::MeetingRoom, 80.0, 80),
        Space::new("coz-1", "Copa", SpaceType::Kitchen, 25.0, 0).with_power(12.0),
        Space::new("ct-1", "Central Térmica", SpaceType::BoilerRoom, 35.0, 0).with_power(90.0),
        Space::new("arm-1", "Arquivo Geral", SpaceType::Archive, 450.0, 2),
        Space::new("ward-1", "Sala de Repouso", SpaceType::Ward, 40.0, 4).with_flags(RiskFlags {
            bedridden: true,
            ..RiskFlags::default()
        }),
    ]
}

pub fn office_paths() -> Vec<EvacuationPath> {
    vec![
        EvacuationPath::new(
            "Escritório até corredor",
            PathKind::Local,
            PathConfiguration::DistinctExits,
            false,
            24.0,
        ),
        EvacuationPath::new(
            "Corredor Norte",
            PathKind::InteriorRoute,
            PathConfiguration::DeadEnd,
            false,
            13.5,
        ),
    ]
}

pub fn office_snapshot() -> ProjectSnapshot {
    let building = office_building();
    let spaces = office_spaces();
    let widths = vec![
        WidthCalculation::for_building(&building),
        WidthCalculation::for_space(&spaces[1]),
    ];
    let smoke = vec![
        SmokeCalculation::ratio_based(
            "Piso -1",
            &RatioRequest::new(
                SmokeZoneType::Basement,
                600.0,
                3.0,
                Ventilation::Mechanical {
                    renovations_per_hour: 6,
                },
            ),
        ),
        SmokeCalculation::canton(
            "Arquivo",
            &CantonRequest::new(450.0, 4.0, CantonRiskClass::Ordinary),
        ),
    ];
    ProjectSnapshot {
        building: Some(building),
        spaces,
        paths: office_paths(),
        widths,
        smoke,
    }
}

mod common;

use common::{care_home, init_tracing, office_building, office_snapshot, office_spaces};
use pretty_assertions::assert_eq;
use scie::assessment::{ModuleStatus, ReportModule};
use scie::compartment::CompartmentVerdict;
use scie::core::{RiskCategory, RiskClass, Space, SpaceType};
use scie::equipment::{estimate_equipment, EquipmentCategory, Quantity};
use scie::evacuation::{check_distance, compute_width, PathConfiguration, PathKind};
use scie::requirements::RequirementChapter;
use scie::smoke::{size_canton, CantonRequest, CantonRiskClass, SmokeResult};
use scie::{assess, classify_building, EngineConfig, ProjectSnapshot};

#[test]
fn test_width_boundary_values() {
    let cases = [(50, 1, 0.9), (51, 2, 1.4), (500, 6, 3.6), (501, 6, 3.6)];
    for (occupancy, units, width) in cases {
        let requirement = compute_width(occupancy);
        assert_eq!(requirement.units_of_passage, units, "occupancy {occupancy}");
        assert!((requirement.width_meters - width).abs() < 1e-9);
    }
}

#[test]
fn test_distance_boundaries() {
    let local = |d| check_distance(PathKind::Local, PathConfiguration::DeadEnd, false, d);
    assert!(local(15.0).computed_compliant);
    assert!(!local(15.01).computed_compliant);

    let interior = |d| check_distance(PathKind::InteriorRoute, PathConfiguration::DeadEnd, true, d);
    assert!(interior(10.0).computed_compliant);
    assert!(!interior(10.01).computed_compliant);
}

#[test]
fn test_canton_sentinel_and_linear_section() {
    let missing = size_canton(&CantonRequest::new(0.0, 6.0, CantonRiskClass::Ordinary));
    assert_eq!(missing.useful_area, 0.0);
    assert_eq!(missing.alpha_percent, 0.0);
    assert!(!missing.is_computed());

    let sized = size_canton(&CantonRequest::new(750.0, 6.0, CantonRiskClass::Ordinary));
    assert!((sized.alpha_percent - 1.3).abs() < 1e-9);
    assert!((sized.useful_area - 750.0 * 0.013).abs() < 1e-9);
}

#[test]
fn test_boiler_room_with_bedridden_is_f() {
    let space = Space::new("ct", "Central Térmica", "central_termica", 30.0, 2).with_flags(
        scie::RiskFlags {
            bedridden: true,
            ..Default::default()
        },
    );
    assert_eq!(space.space_type, SpaceType::BoilerRoom);
    assert_eq!(space.risk_class, RiskClass::F);
}

#[test]
fn test_kitchen_invariant() {
    let small = Space::new("k", "Copa", SpaceType::Kitchen, 8.0, 0);
    let names: Vec<String> = estimate_equipment(&small, EquipmentCategory::PortableExtinguishers)
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert!(names.iter().any(|n| n.contains("CO2")));
    assert!(names.iter().any(|n| n.contains("Manta")));

    let medium = Space::new("k", "Cozinha", SpaceType::Kitchen, 25.0, 0);
    let kit = estimate_equipment(&medium, EquipmentCategory::PortableExtinguishers);
    let foam = kit.iter().find(|e| e.name.contains("espuma"));
    assert_eq!(foam.map(|e| e.quantity), Some(Quantity::Count(1)));
}

#[test]
fn test_office_project_assessment() {
    init_tracing();
    let snapshot = office_snapshot();
    let assessment = assess(&snapshot, &EngineConfig::default());

    assert_eq!(assessment.risk_category(), Some(RiskCategory::Two));
    assert_eq!(assessment.worst_risk_class, Some(RiskClass::F));
    // kitchen C, boiler room F, archive C, ward D
    assert_eq!(assessment.aggravated_spaces, 4);

    // Interior dead end of 13.5 m is within the 15 m ordinary limit
    assert_eq!(assessment.paths.total, 2);
    assert_eq!(assessment.paths.non_compliant, 0);
    let status = |module| assessment.status_of(module);
    assert_eq!(status(ReportModule::Distances), Some(ModuleStatus::Ok));
    assert_eq!(status(ReportModule::Smoke), Some(ModuleStatus::Ok));
    assert_eq!(
        status(ReportModule::Technical(RequirementChapter::FireResistance)),
        Some(ModuleStatus::Info)
    );

    assert!(assessment
        .compartments
        .iter()
        .all(|c| c.verdict == CompartmentVerdict::Accepted));
    assert!(assessment.is_compliant());

    assert_eq!(assessment.equipment.len(), snapshot.spaces.len());
    assert_eq!(assessment.requirements.len(), RequirementChapter::ALL.len());
    let (_, resistance) = &assessment.requirements[0];
    assert_eq!(resistance[0].value, "R 60");
    assert_eq!(resistance.len(), 3);
}

#[test]
fn test_smoke_records_keep_method_shape() {
    let snapshot = office_snapshot();
    match &snapshot.smoke[0].result {
        SmokeResult::RatioBased(result) => {
            let flow = result.mechanical.expect("basement uses mechanical extraction");
            assert_eq!(flow.renovations_per_hour, 12);
            assert_eq!(flow.flow_m3_per_h, 600.0 * 3.0 * 12.0);
        }
        other => panic!("expected ratio-based result, got {other:?}"),
    }
    assert!(matches!(
        snapshot.smoke[1].result,
        SmokeResult::CantonCoefficient(_)
    ));
}

#[test]
fn test_snapshot_persists_verbatim() {
    let snapshot = office_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: ProjectSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["building"]["utilization_type"], "III");
    assert_eq!(value["spaces"][3]["space_type"], "central_termica");
    assert_eq!(value["paths"][1]["kind"], "interior");
    assert_eq!(value["paths"][1]["configuration"], "impasse");
    assert_eq!(value["smoke"][1]["result"]["method"], "canton_coefficient");
}

#[test]
fn test_care_home_category_and_detection() {
    let building = care_home();
    assert_eq!(classify_building(&building), RiskCategory::One);

    let snapshot = ProjectSnapshot {
        building: Some(building),
        spaces: office_spaces(),
        ..Default::default()
    };
    let assessment = assess(&snapshot, &EngineConfig::default());
    let detection = assessment
        .requirements
        .iter()
        .find(|(chapter, _)| *chapter == RequirementChapter::Detection)
        .map(|(_, reqs)| reqs.clone())
        .unwrap_or_default();
    assert_eq!(detection.len(), 2);
    assert_eq!(detection[1].value, "Deteção Obrigatória");
}

#[test]
fn test_category_three_office() {
    let mut building = office_building();
    building.height = 40.0;
    assert_eq!(classify_building(&building), RiskCategory::Three);
    building.occupancy = 5_001;
    assert_eq!(classify_building(&building), RiskCategory::Four);
}

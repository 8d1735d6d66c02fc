//! Decision tables for each equipment category
//!
//! The numeric rows live in `thresholds::equipment`; this module only decides
//! which rows apply to a space.

use super::{EquipmentEstimate, Quantity};
use crate::core::{RiskClass, Space, SpaceType};
use crate::evacuation::compute_width;
use crate::thresholds::equipment::{
    area_quantity, extinguisher_row, ATRIUM_STUDY_HEIGHT, DOOR_OCCUPANCY_THRESHOLD,
    EXIT_SIGN_COVERAGE, HEAT_PRONE_TYPES, KITCHEN_FOAM_AREA, KITCHEN_HOOD_POWER,
    LIGHTING_AREA_THRESHOLD, LIGHTING_COVERAGE_DENSE, LIGHTING_COVERAGE_SPARSE,
    LIGHTING_OCCUPANCY_THRESHOLD, SMOKE_DETECTOR_COVERAGE, SPRINKLER_HEAD_COVERAGE,
    STORAGE_SPRINKLER_AREA, STORAGE_SPRINKLER_FIRE_LOAD, TECHNICAL_EXTINGUISHER,
    TECHNICAL_POWDER_POWER, THERMAL_DETECTOR_COVERAGE,
};

fn per_area(divisor: f64) -> String {
    format!("1 un. / {divisor} m²")
}

pub(super) fn portable_extinguishers(space: &Space) -> Vec<EquipmentEstimate> {
    if space.space_type == SpaceType::Kitchen {
        let mut kit = vec![
            EquipmentEstimate::units("Extintor CO2 2 kg", 1, "Kit base de cozinha"),
            EquipmentEstimate::units("Manta ignífuga", 1, "Kit base de cozinha"),
        ];
        if space.area > KITCHEN_FOAM_AREA {
            kit.push(EquipmentEstimate::units(
                "Extintor de espuma 6 L",
                1,
                format!("Cozinha com área > {KITCHEN_FOAM_AREA} m²"),
            ));
        }
        return kit;
    }

    let row = extinguisher_row(&space.space_type);
    let mut estimates = vec![EquipmentEstimate::units(
        row.name,
        area_quantity(space.area, row.divisor),
        format!("{} ({})", per_area(row.divisor), row.agent),
    )];

    let powered_plant = matches!(
        space.space_type,
        SpaceType::BoilerRoom | SpaceType::Generator
    );
    if row == TECHNICAL_EXTINGUISHER
        && powered_plant
        && space.power.is_some_and(|kw| kw > TECHNICAL_POWDER_POWER)
    {
        estimates.push(EquipmentEstimate::units(
            "Extintor de pó químico ABC 6 kg",
            1,
            format!("Potência instalada > {TECHNICAL_POWDER_POWER} kW"),
        ));
    }
    estimates
}

pub(super) fn doors(space: &Space) -> Vec<EquipmentEstimate> {
    let mut estimates = Vec::new();

    if space.occupancy > DOOR_OCCUPANCY_THRESHOLD {
        let exits = compute_width(space.occupancy).minimum_exits;
        let rationale = format!("Efetivo > {DOOR_OCCUPANCY_THRESHOLD} pessoas");
        estimates.push(EquipmentEstimate::units(
            "Barra antipânico",
            exits,
            rationale.clone(),
        ));
        estimates.push(EquipmentEstimate::new(
            "Abertura no sentido da evacuação",
            Quantity::Required,
            "-",
            rationale,
        ));
    }

    // Rated doors are keyed on classes C and F only; D and E spaces get
    // the egress items above and no fire-rated door
    match space.risk_class {
        RiskClass::C => estimates.push(EquipmentEstimate::new(
            "Porta corta-fogo E 30 C",
            Quantity::Required,
            "-",
            "Local de risco C",
        )),
        RiskClass::F => estimates.push(EquipmentEstimate::new(
            "Porta corta-fogo EI 60 C",
            Quantity::Required,
            "-",
            "Local de risco F",
        )),
        _ => {}
    }
    estimates
}

pub(super) fn detection(space: &Space) -> Vec<EquipmentEstimate> {
    let mut estimates = Vec::new();
    let tall_atrium = space.space_type == SpaceType::Atrium
        && space.height.is_some_and(|h| h > ATRIUM_STUDY_HEIGHT);

    if space.space_type == SpaceType::Toilets {
        estimates.push(EquipmentEstimate::new(
            "Detetor automático",
            Quantity::NotApplicable,
            "-",
            "Instalações sanitárias",
        ));
    } else if tall_atrium {
        estimates.push(EquipmentEstimate::new(
            "Detetor linear de feixe",
            Quantity::DedicatedStudy,
            "-",
            format!("Átrio com pé-direito > {ATRIUM_STUDY_HEIGHT} m"),
        ));
    } else if HEAT_PRONE_TYPES.contains(&space.space_type) {
        estimates.push(EquipmentEstimate::units(
            "Detetor térmico",
            area_quantity(space.area, THERMAL_DETECTOR_COVERAGE),
            per_area(THERMAL_DETECTOR_COVERAGE),
        ));
    } else {
        estimates.push(EquipmentEstimate::units(
            "Detetor ótico de fumo",
            area_quantity(space.area, SMOKE_DETECTOR_COVERAGE),
            per_area(SMOKE_DETECTOR_COVERAGE),
        ));
    }

    if space.occupancy > DOOR_OCCUPANCY_THRESHOLD || space.space_type == SpaceType::Circulation {
        estimates.push(EquipmentEstimate::units(
            "Botoneira de alarme manual",
            1,
            "Junto à saída do local",
        ));
    }
    estimates
}

pub(super) fn fixed_suppression(space: &Space) -> Vec<EquipmentEstimate> {
    let estimate = match space.space_type {
        SpaceType::Kitchen if space.power.is_some_and(|kw| kw > KITCHEN_HOOD_POWER) => {
            EquipmentEstimate::new(
                "Extinção automática na hotte",
                Quantity::Required,
                "-",
                format!("Potência instalada > {KITCHEN_HOOD_POWER} kW"),
            )
        }
        SpaceType::Warehouse | SpaceType::Archive
            if space.area > STORAGE_SPRINKLER_AREA
                || space.fire_load.is_some_and(|q| q > STORAGE_SPRINKLER_FIRE_LOAD) =>
        {
            EquipmentEstimate::units(
                "Aspersor (sprinkler)",
                area_quantity(space.area, SPRINKLER_HEAD_COVERAGE),
                format!(
                    "Área > {} m² ou carga de incêndio > {} MJ/m²",
                    STORAGE_SPRINKLER_AREA, STORAGE_SPRINKLER_FIRE_LOAD
                ),
            )
        }
        SpaceType::RackRoom | SpaceType::Transformer => EquipmentEstimate::new(
            "Extinção automática por gás",
            Quantity::Required,
            "-",
            "Equipamento elétrico sensível",
        ),
        _ => EquipmentEstimate::new(
            "Extinção automática",
            Quantity::NotApplicable,
            "-",
            "Não exigida para o tipo de espaço",
        ),
    };
    vec![estimate]
}

pub(super) fn signage(space: &Space) -> Vec<EquipmentEstimate> {
    let dense =
        space.area > LIGHTING_AREA_THRESHOLD || space.occupancy > LIGHTING_OCCUPANCY_THRESHOLD;
    let lighting_coverage = if dense {
        LIGHTING_COVERAGE_DENSE
    } else {
        LIGHTING_COVERAGE_SPARSE
    };
    vec![
        EquipmentEstimate::units(
            "Sinal de saída fotoluminescente",
            area_quantity(space.area, EXIT_SIGN_COVERAGE),
            per_area(EXIT_SIGN_COVERAGE),
        ),
        EquipmentEstimate::units(
            "Bloco autónomo de iluminação de emergência",
            area_quantity(space.area, lighting_coverage),
            per_area(lighting_coverage),
        ),
    ]
}

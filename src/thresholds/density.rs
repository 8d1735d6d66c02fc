use crate::core::SpaceType;
use serde::Serialize;

/// Occupancy density of a space type.
///
/// `factor` is floor area per person in m². A factor of zero marks types that
/// do not contribute to the building's occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OccupancyDensity {
    pub factor: f64,
    pub label: &'static str,
    pub description: &'static str,
}

const fn density(factor: f64, label: &'static str, description: &'static str) -> OccupancyDensity {
    OccupancyDensity {
        factor,
        label,
        description,
    }
}

const NULL_OCCUPANCY: OccupancyDensity = density(0.0, "Ocup. Nula", "Acesso apenas a manutenção");

/// Density row for a space type, `None` for types outside the table
pub fn occupancy_density(space_type: &SpaceType) -> Option<OccupancyDensity> {
    let row = match space_type {
        SpaceType::Office => density(10.0, "1 pax / 10 m²", "Escritórios e gabinetes"),
        SpaceType::MeetingRoom => density(
            1.0,
            "1 pax / 1 m²",
            "Salas de reunião/conferência (s/ lugares fixos)",
        ),
        SpaceType::Classroom => density(1.5, "1 pax / 1.5 m²", "Salas de formação/escolar"),
        SpaceType::Atrium => density(3.0, "1 pax / 3 m²", "Átrios e gares (piso não saída)"),
        SpaceType::Retail => density(
            3.0,
            "1 pax / 3 m²",
            "Lojas e centros comerciais (pisos gerais)",
        ),
        SpaceType::Restaurant => density(1.5, "1 pax / 1.5 m²", "Zona de público (sentado)"),
        SpaceType::Auditorium => density(
            1.0,
            "1 pax / m²",
            "Salas polivalentes / espetáculos (s/ lugares fixos)",
        ),
        SpaceType::Library => density(10.0, "1 pax / 10 m²", "Salas de leitura e arquivos"),
        SpaceType::Gym => density(4.0, "1 pax / 4 m²", "Áreas desportivas de prática"),
        SpaceType::Dormitory => density(
            10.0,
            "~1 pax / 10 m²",
            "Estimativa por área (usar nº de camas real)",
        ),
        SpaceType::Lounge => density(2.0, "1 pax / 2 m²", "Salas de estar e convívio"),
        SpaceType::Ward => density(10.0, "~1 pax / 10 m²", "Estimativa (usar nº de camas real)"),
        SpaceType::ConsultingRoom => density(10.0, "1 pax / 10 m²", "Gabinetes de consulta"),
        SpaceType::Kitchen => density(10.0, "1 pax / 10 m²", "Cozinhas industriais"),
        SpaceType::Laundry => density(10.0, "1 pax / 10 m²", "Zonas de serviço"),
        SpaceType::Warehouse => density(40.0, "1 pax / 40 m²", "Armazéns e depósitos"),
        SpaceType::Workshop => {
            density(15.0, "1 pax / 15 m²", "Oficinas e laboratórios industriais")
        }
        SpaceType::Laboratory => density(10.0, "1 pax / 10 m²", "Laboratórios de investigação"),
        SpaceType::Garage => density(40.0, "1 pax / 40 m²", "Estacionamento"),
        SpaceType::SecurityPost => density(5.0, "1 pax / 5 m²", "Postos de trabalho permanentes"),
        SpaceType::Toilets => density(0.0, "-", "Não contribui para o efetivo"),
        SpaceType::Circulation => {
            density(0.0, "-", "Zonas de passagem (exceto se usadas p/ espera)")
        }
        SpaceType::TechnicalRoom | SpaceType::RackRoom => NULL_OCCUPANCY,
        SpaceType::BoilerRoom
        | SpaceType::Generator
        | SpaceType::Transformer
        | SpaceType::WasteRoom => density(0.0, "Ocup. Nula", "Local técnico"),
        SpaceType::Archive
        | SpaceType::EnergyRoom
        | SpaceType::Maintenance
        | SpaceType::ControlCentre
        | SpaceType::Stage
        | SpaceType::Other(_) => return None,
    };
    Some(row)
}

//! Regulatory requirement text per report chapter.
//!
//! Each chapter turns the building category and descriptor into a short list
//! of display requirements. The strings are Portuguese report text.

use crate::core::{BuildingDescriptor, RiskCategory, UtilizationType};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Report chapters that carry generated requirement text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RequirementChapter {
    FireResistance = 5,
    FireReaction = 6,
    FirstAid = 8,
    Doors = 9,
    FireLobbies = 10,
    Detection = 11,
    Suppression = 12,
    Signage = 13,
}

impl RequirementChapter {
    pub const ALL: [RequirementChapter; 8] = [
        RequirementChapter::FireResistance,
        RequirementChapter::FireReaction,
        RequirementChapter::FirstAid,
        RequirementChapter::Doors,
        RequirementChapter::FireLobbies,
        RequirementChapter::Detection,
        RequirementChapter::Suppression,
        RequirementChapter::Signage,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn title(&self) -> &'static str {
        match self {
            RequirementChapter::FireResistance => "Resistência ao Fogo",
            RequirementChapter::FireReaction => "Reação ao Fogo",
            RequirementChapter::FirstAid => "Meios de Primeira Intervenção",
            RequirementChapter::Doors => "Características das Portas",
            RequirementChapter::FireLobbies => "Câmaras Corta-Fogo",
            RequirementChapter::Detection => "Deteção e Alarme",
            RequirementChapter::Suppression => "Sistemas de Extinção",
            RequirementChapter::Signage => "Sinalização e Iluminação",
        }
    }
}

impl From<RequirementChapter> for u8 {
    fn from(chapter: RequirementChapter) -> u8 {
        chapter.number()
    }
}

impl TryFrom<u8> for RequirementChapter {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        RequirementChapter::ALL
            .into_iter()
            .find(|chapter| chapter.number() == value)
            .ok_or_else(|| Error::unknown_tag("requirement chapter", value.to_string()))
    }
}

impl FromStr for RequirementChapter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::unknown_tag("requirement chapter", s))?;
        RequirementChapter::try_from(number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalRequirement {
    pub title: String,
    pub value: String,
    pub description: String,
    /// Left unset by the generator; reviewers fill it in
    #[serde(default)]
    pub is_compliant: Option<bool>,
}

impl TechnicalRequirement {
    fn new(title: &str, value: impl Into<String>, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            description: description.to_string(),
            is_compliant: None,
        }
    }
}

fn rating(prefix: &str, category: RiskCategory) -> String {
    let minutes = match category {
        RiskCategory::One => 30,
        RiskCategory::Two => 60,
        RiskCategory::Three => 90,
        RiskCategory::Four => 120,
    };
    format!("{prefix} {minutes}")
}

fn fire_resistance(
    category: RiskCategory,
    building: &BuildingDescriptor,
) -> Vec<TechnicalRequirement> {
    let mut reqs = vec![
        TechnicalRequirement::new(
            "Estrutura Principal",
            rating("R", category),
            "Estabilidade ao fogo exigida para elementos estruturais principais.",
        ),
        TechnicalRequirement::new(
            "Pavimentos",
            rating("REI", category),
            "Integridade e Isolamento na separação entre pisos.",
        ),
    ];
    if building.below_grade_floors > 0 {
        reqs.push(TechnicalRequirement::new(
            "Caves (Pisos Enterrados)",
            "REI 90 (mínimo)",
            "Agravamento geral para pisos enterrados.",
        ));
    }
    reqs
}

fn fire_reaction() -> Vec<TechnicalRequirement> {
    vec![
        TechnicalRequirement::new(
            "Vias de Evacuação",
            "C-s2,d0 (Paredes) / Bfl-s1 (Pav)",
            "Requisito para corredores e caminhos de evacuação protegidos.",
        ),
        TechnicalRequirement::new(
            "Locais de Risco A",
            "D-s2,d0",
            "Requisito geral para revestimentos em locais de risco reduzido.",
        ),
        TechnicalRequirement::new(
            "Locais de Risco B/C",
            "C-s2,d0",
            "Requisito para locais com público ou carga térmica.",
        ),
    ]
}

fn first_aid(category: RiskCategory, building: &BuildingDescriptor) -> Vec<TechnicalRequirement> {
    let mut reqs = vec![TechnicalRequirement::new(
        "Extintores Portáteis",
        "1 / 15m ou 500m²",
        "Distância máxima a percorrer de 15m. Mínimo 2 por piso.",
    )];
    if category >= RiskCategory::Two {
        reqs.push(TechnicalRequirement::new(
            "Rede de Incêndio (RIA)",
            "Obrigatório (25mm)",
            "Carretéis armados tipo teatro junto aos acessos e saídas.",
        ));
    }
    if matches!(
        building.utilization_type,
        UtilizationType::II | UtilizationType::XII
    ) {
        reqs.push(TechnicalRequirement::new(
            "Extintores de Pó Químico",
            "ABC",
            "Recomendado para fogos tipo B (Líquidos combustíveis) e C (Gás).",
        ));
    }
    reqs
}

fn doors(category: RiskCategory, building: &BuildingDescriptor) -> Vec<TechnicalRequirement> {
    let swing = if building.occupancy > 50 {
        "Para o Exterior"
    } else {
        "Indiferente"
    };
    let mut reqs = vec![
        TechnicalRequirement::new(
            "Sentido de Abertura",
            swing,
            "Para locais com mais de 50 pessoas, abertura no sentido da fuga.",
        ),
        TechnicalRequirement::new(
            "Dispositivos de Fecho",
            "Barras Antipânico",
            "Obrigatório em saídas com efetivo > 50 pessoas.",
        ),
    ];
    if category >= RiskCategory::Three {
        reqs.push(TechnicalRequirement::new(
            "Portas Corta-Fogo",
            "PC E 30 C",
            "Isolamento de caixas de escada e zonas de risco.",
        ));
    }
    reqs
}

fn fire_lobbies(
    category: RiskCategory,
    building: &BuildingDescriptor,
) -> Vec<TechnicalRequirement> {
    let requirement = if category >= RiskCategory::Three || building.height > 28.0 {
        TechnicalRequirement::new(
            "Acesso a Escadas",
            "Obrigatório",
            "Interposição de câmara corta-fogo no acesso às escadas protegidas.",
        )
    } else {
        TechnicalRequirement::new(
            "Acesso a Escadas",
            "Não Obrigatório",
            "Acesso direto permitido para categorias inferiores.",
        )
    };
    vec![requirement]
}

fn detection(category: RiskCategory, building: &BuildingDescriptor) -> Vec<TechnicalRequirement> {
    let mut reqs = vec![if category == RiskCategory::One {
        TechnicalRequirement::new(
            "Configuração",
            "Tipo 4 (Manual)",
            "Botoneiras de alarme manuais e sinalizadores sonoros.",
        )
    } else {
        TechnicalRequirement::new(
            "Configuração",
            "Tipo 3 ou 2 (Automática)",
            "Deteção automática em vias de evacuação e locais de risco.",
        )
    }];
    if building.has_sleeping_area {
        reqs.push(TechnicalRequirement::new(
            "Locais de Dormida",
            "Deteção Obrigatória",
            "Detetores pontuais autónomos ou ligados à central.",
        ));
    }
    reqs
}

/// Gross area above which a parking building needs sprinklers below category 3, m²
const PARKING_SPRINKLER_AREA: f64 = 9_600.0;

fn suppression(category: RiskCategory, building: &BuildingDescriptor) -> Vec<TechnicalRequirement> {
    let large_parking = building.utilization_type == UtilizationType::II
        && building.gross_area > PARKING_SPRINKLER_AREA;
    let requirement = if category >= RiskCategory::Three || large_parking {
        TechnicalRequirement::new("Sprinklers", "Obrigatório", "Rede automática de água.")
    } else {
        TechnicalRequirement::new(
            "Sprinklers",
            "Não Exigível",
            "Regra geral (verificar riscos específicos).",
        )
    };
    vec![requirement]
}

fn signage() -> Vec<TechnicalRequirement> {
    vec![
        TechnicalRequirement::new(
            "Iluminação de Emergência",
            "Obrigatório",
            "Caminhos de evacuação, saídas, locais de risco e pontos de alarme.",
        ),
        TechnicalRequirement::new(
            "Sinalização",
            "Fotoluminescente",
            "Placas de saída, extintores, quadro elétrico, botoneiras.",
        ),
    ]
}

/// Requirement list for one chapter
pub fn technical_requirements(
    chapter: RequirementChapter,
    category: RiskCategory,
    building: &BuildingDescriptor,
) -> Vec<TechnicalRequirement> {
    match chapter {
        RequirementChapter::FireResistance => fire_resistance(category, building),
        RequirementChapter::FireReaction => fire_reaction(),
        RequirementChapter::FirstAid => first_aid(category, building),
        RequirementChapter::Doors => doors(category, building),
        RequirementChapter::FireLobbies => fire_lobbies(category, building),
        RequirementChapter::Detection => detection(category, building),
        RequirementChapter::Suppression => suppression(category, building),
        RequirementChapter::Signage => signage(),
    }
}

/// Requirement lists for every chapter, in chapter order
pub fn all_requirements(
    category: RiskCategory,
    building: &BuildingDescriptor,
) -> Vec<(RequirementChapter, Vec<TechnicalRequirement>)> {
    RequirementChapter::ALL
        .into_iter()
        .map(|chapter| {
            let reqs = technical_requirements(chapter, category, building);
            (chapter, reqs)
        })
        .collect()
}

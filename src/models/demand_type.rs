use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandType {
    #[serde(rename = "FEL 0 / FEL 1")]
    Fel01,
    #[serde(rename = "Garantia")]
    Warranty,
    #[serde(rename = "Rotina")]
    Routine,
    #[serde(rename = "Suporte de Engenharia")]
    EngineeringSupport,
    #[serde(rename = "Projeto")]
    Project,
}

impl DemandType {
    pub fn label(&self) -> &'static str {
        match self {
            DemandType::Fel01 => "FEL 0 / FEL 1",
            DemandType::Warranty => "Garantia",
            DemandType::Routine => "Rotina",
            DemandType::EngineeringSupport => "Suporte de Engenharia",
            DemandType::Project => "Projeto",
        }
    }

    /// Convert CLI code → enum
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "fel" | "fel01" => Some(DemandType::Fel01),
            "warranty" | "garantia" => Some(DemandType::Warranty),
            "routine" | "rotina" => Some(DemandType::Routine),
            "support" | "suporte" => Some(DemandType::EngineeringSupport),
            "project" | "projeto" => Some(DemandType::Project),
            _ => None,
        }
    }
}

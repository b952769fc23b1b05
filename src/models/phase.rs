use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectPhase {
    #[serde(rename = "FEL 0 / FEL 1")]
    Fel01,
    #[serde(rename = "PE")]
    Pe,
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "Pós obra")]
    PostWorks,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "LS")]
    Ls,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ProjectPhase {
    pub const ALL: [ProjectPhase; 7] = [
        ProjectPhase::Fel01,
        ProjectPhase::Pe,
        ProjectPhase::Pc,
        ProjectPhase::PostWorks,
        ProjectPhase::Co,
        ProjectPhase::Ls,
        ProjectPhase::NotApplicable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectPhase::Fel01 => "FEL 0 / FEL 1",
            ProjectPhase::Pe => "PE",
            ProjectPhase::Pc => "PC",
            ProjectPhase::PostWorks => "Pós obra",
            ProjectPhase::Co => "CO",
            ProjectPhase::Ls => "LS",
            ProjectPhase::NotApplicable => "N/A",
        }
    }

    /// Parse user input. Accepts the label or a short code (`fel`, `pos`, `na`).
    pub fn from_input(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase();
        match norm.as_str() {
            "fel" | "fel01" => return Some(ProjectPhase::Fel01),
            "pos" | "pos-obra" | "post" => return Some(ProjectPhase::PostWorks),
            "na" => return Some(ProjectPhase::NotApplicable),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == norm)
    }
}

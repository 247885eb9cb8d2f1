use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rag {
    Red,
    Amber,
    Green,
}

impl Rag {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Some(Rag::Red),
            "amber" | "a" | "yellow" => Some(Rag::Amber),
            "green" | "g" => Some(Rag::Green),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rag::Red => "Red",
            Rag::Amber => "Amber",
            Rag::Green => "Green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub name: String,
    pub rag: Rag,
    pub description: String,
    pub mitigation: String,
    pub status: RiskStatus,
    pub owner: String,
    pub is_blocker: bool,
    pub is_pending_decision: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risks {
    pub red: u32,
    pub amber: u32,
    pub green: u32,
    pub active_blockers: u32,
    pub pending_decisions: u32,
    pub items: Vec<Risk>,
}

impl Risks {
    /// Closed risks stay in `items` but are left out of every count.
    pub fn from_items(items: Vec<Risk>) -> Self {
        let mut risks = Self {
            red: 0,
            amber: 0,
            green: 0,
            active_blockers: 0,
            pending_decisions: 0,
            items: Vec::new(),
        };

        for risk in items.iter().filter(|r| r.status == RiskStatus::Open) {
            match risk.rag {
                Rag::Red => risks.red += 1,
                Rag::Amber => risks.amber += 1,
                Rag::Green => risks.green += 1,
            }
            if risk.is_blocker {
                risks.active_blockers += 1;
            }
            if risk.is_pending_decision {
                risks.pending_decisions += 1;
            }
        }

        risks.items = items;
        risks
    }
}

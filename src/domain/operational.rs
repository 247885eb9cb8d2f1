use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Development")]
    InDevelopment,
    Live,
    Planned,
}

impl SystemStatus {
    /// Recognizes the four status labels regardless of case or spacing.
    pub fn parse(text: &str) -> Option<Self> {
        let key: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "notstarted" => Some(SystemStatus::NotStarted),
            "indevelopment" => Some(SystemStatus::InDevelopment),
            "live" => Some(SystemStatus::Live),
            "planned" => Some(SystemStatus::Planned),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::NotStarted => "Not Started",
            SystemStatus::InDevelopment => "In Development",
            SystemStatus::Live => "Live",
            SystemStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operational {
    pub suppliers_confirmed: u32,
    pub suppliers_total: u32,
    pub products_in_catalogue: f64,
    pub staff_hired: f64,
    pub staff_required: f64,
    pub website_status: SystemStatus,
    pub inventory_system_status: SystemStatus,
}

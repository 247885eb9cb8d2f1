use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::budget::Budget;
use crate::domain::capital::Capital;
use crate::domain::cash_flow::CashFlow;
use crate::domain::financial::Financial;
use crate::domain::operational::Operational;
use crate::domain::project::Project;
use crate::domain::risk::Risks;

/// Everything the dashboard shows, produced fresh by every parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub capital: Capital,
    pub showroom: Project,
    pub warehouse: Project,
    pub budget: Budget,
    pub operational: Operational,
    pub financial: Financial,
    pub risks: Risks,
    pub cash_flow: CashFlow,
    pub last_updated: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    Excel,
    Default,
}

/// A snapshot together with where it came from, as handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub success: bool,
    pub source: SnapshotSource,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_modified: Option<DateTime<Local>>,
    pub data: Snapshot,
}

impl ParseOutcome {
    pub fn from_excel(data: Snapshot) -> Self {
        Self {
            success: true,
            source: SnapshotSource::Excel,
            message: None,
            last_modified: None,
            data,
        }
    }

    pub fn from_default(data: Snapshot, message: &str) -> Self {
        Self {
            success: true,
            source: SnapshotSource::Default,
            message: Some(message.to_string()),
            last_modified: None,
            data,
        }
    }
}

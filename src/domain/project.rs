use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::services::coercion::days_remaining;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    pub target_date: Option<NaiveDate>,
    pub status_percent: f64,
    pub complete: bool,
    pub actual_date: Option<NaiveDate>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub location: String,
    pub completion_percent: f64,
    pub target_date: Option<NaiveDate>,
    pub days_remaining: i64,
    pub milestones: Vec<Milestone>,
    pub is_paused: bool,
    pub pause_reason: String,
    pub notes: String,
}

impl Project {
    /// Milestones keep their sheet order; completion is their mean progress.
    pub fn new(
        location: &str,
        target_date: Option<NaiveDate>,
        milestones: Vec<Milestone>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            location: location.to_string(),
            completion_percent: mean_completion(&milestones),
            target_date,
            days_remaining: days_remaining(target_date, now),
            milestones,
            is_paused: false,
            pause_reason: String::new(),
            notes: String::new(),
        }
    }

    pub fn paused(mut self, is_paused: bool, pause_reason: &str) -> Self {
        self.is_paused = is_paused;
        self.pause_reason = pause_reason.to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }
}

fn mean_completion(milestones: &[Milestone]) -> f64 {
    if milestones.is_empty() {
        return 0.0;
    }
    let total: f64 = milestones.iter().map(|m| m.status_percent).sum();
    total / milestones.len() as f64
}

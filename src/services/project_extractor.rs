use chrono::NaiveDateTime;

use crate::domain::cell::SheetRow;
use crate::domain::project::{Milestone, Project};
use crate::services::coercion::{coerce_boolean, coerce_date, coerce_number, coerce_text};
use crate::services::settings::ProjectSettings;

const MILESTONE: &[&str] = &["Milestone", "Name", "Task"];
const TARGET_DATE: &[&str] = &["Target Date", "Target", "Due Date"];
const STATUS_PERCENT: &[&str] = &["Status %", "Status", "Progress", "Complete %"];
const COMPLETE: &[&str] = &["Complete", "Completed", "Done"];
const ACTUAL_DATE: &[&str] = &["Actual Date", "Completed Date"];
const NOTES: &[&str] = &["Notes", "Note", "Comments"];

pub fn extract_milestones(rows: &[SheetRow]) -> Vec<Milestone> {
    rows.iter()
        .map(|row| Milestone {
            name: coerce_text(row.cell(MILESTONE)),
            target_date: coerce_date(row.cell(TARGET_DATE)),
            status_percent: coerce_number(row.cell(STATUS_PERCENT)).clamp(0.0, 100.0),
            complete: coerce_boolean(row.cell(COMPLETE)),
            actual_date: coerce_date(row.cell(ACTUAL_DATE)),
            notes: coerce_text(row.cell(NOTES)),
        })
        .collect()
}

/// Builds one project from its progress sheet. Location, target date and
/// pause state come from the settings.
pub fn extract_project(rows: &[SheetRow], settings: &ProjectSettings, now: NaiveDateTime) -> Project {
    Project::new(
        &settings.location,
        settings.target_date,
        extract_milestones(rows),
        now,
    )
    .paused(settings.paused, &settings.pause_reason)
}

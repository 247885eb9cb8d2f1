use chrono::NaiveDate;
use log::warn;

use crate::domain::cell::SheetRow;
use crate::domain::financial::RevenueMix;
use crate::domain::operational::SystemStatus;
use crate::services::coercion::{coerce_boolean, coerce_date};
use crate::services::key_value_sheet::{KeyValueSheet, LabelMatch};

const SETTING: &[&str] = &["Setting", "Name", "Key"];

const SHOWROOM_LOCATION: &[LabelMatch] = &[LabelMatch::Contains("showroom location")];
const SHOWROOM_TARGET: &[LabelMatch] = &[LabelMatch::Contains("showroom target")];
const SHOWROOM_PAUSED: &[LabelMatch] = &[LabelMatch::Contains("showroom paused")];
const WAREHOUSE_LOCATION: &[LabelMatch] = &[LabelMatch::Contains("warehouse location")];
const WAREHOUSE_TARGET: &[LabelMatch] = &[LabelMatch::Contains("warehouse target")];
const WAREHOUSE_PAUSED: &[LabelMatch] = &[LabelMatch::Contains("warehouse paused")];
const GROSS_MARGIN: &[LabelMatch] = &[LabelMatch::Contains("gross margin")];
const B2B_SPLIT: &[LabelMatch] = &[LabelMatch::Contains("b2b split"), LabelMatch::Contains("b2b")];
const B2C_SPLIT: &[LabelMatch] = &[LabelMatch::Contains("b2c split"), LabelMatch::Contains("b2c")];
const STAFF_HIRED: &[LabelMatch] = &[LabelMatch::Contains("staff hired")];
const STAFF_REQUIRED: &[LabelMatch] = &[LabelMatch::Contains("staff required")];
const WEBSITE_STATUS: &[LabelMatch] = &[LabelMatch::Contains("website status"), LabelMatch::Contains("website")];
const INVENTORY_STATUS: &[LabelMatch] = &[LabelMatch::Contains("inventory system")];

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSettings {
    pub location: String,
    pub target_date: Option<NaiveDate>,
    pub paused: bool,
    pub pause_reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffingSettings {
    pub staff_hired: f64,
    pub staff_required: f64,
    pub website_status: SystemStatus,
    pub inventory_system_status: SystemStatus,
}

/// Cross-cutting values read from the Settings sheet and fed into the
/// project, operational and financial extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookSettings {
    pub showroom: ProjectSettings,
    pub warehouse: ProjectSettings,
    pub revenue_mix: RevenueMix,
    pub staffing: StaffingSettings,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            showroom: ProjectSettings {
                location: "London Showroom".to_string(),
                target_date: NaiveDate::from_ymd_opt(2026, 6, 1),
                paused: false,
                pause_reason: String::new(),
            },
            warehouse: ProjectSettings {
                location: "UK Warehouse".to_string(),
                target_date: NaiveDate::from_ymd_opt(2026, 1, 31),
                paused: false,
                pause_reason: String::new(),
            },
            revenue_mix: RevenueMix {
                gross_margin_target: 45.0,
                b2b_split: 60.0,
                b2c_split: 40.0,
            },
            staffing: StaffingSettings {
                staff_hired: 1.0,
                staff_required: 3.0,
                website_status: SystemStatus::InDevelopment,
                inventory_system_status: SystemStatus::Planned,
            },
        }
    }
}

impl WorkbookSettings {
    /// Reads settings rows; each value that is missing or malformed keeps
    /// its default.
    pub fn from_rows(rows: &[SheetRow]) -> Self {
        let defaults = Self::default();
        let sheet = KeyValueSheet::new(rows, SETTING);

        Self {
            showroom: project_settings(
                &sheet,
                defaults.showroom,
                SHOWROOM_LOCATION,
                SHOWROOM_TARGET,
                SHOWROOM_PAUSED,
            ),
            warehouse: project_settings(
                &sheet,
                defaults.warehouse,
                WAREHOUSE_LOCATION,
                WAREHOUSE_TARGET,
                WAREHOUSE_PAUSED,
            ),
            revenue_mix: RevenueMix {
                gross_margin_target: sheet
                    .explicit_number(GROSS_MARGIN)
                    .unwrap_or(defaults.revenue_mix.gross_margin_target),
                b2b_split: sheet
                    .explicit_number(B2B_SPLIT)
                    .unwrap_or(defaults.revenue_mix.b2b_split),
                b2c_split: sheet
                    .explicit_number(B2C_SPLIT)
                    .unwrap_or(defaults.revenue_mix.b2c_split),
            },
            staffing: StaffingSettings {
                staff_hired: sheet
                    .explicit_number(STAFF_HIRED)
                    .unwrap_or(defaults.staffing.staff_hired),
                staff_required: sheet
                    .explicit_number(STAFF_REQUIRED)
                    .unwrap_or(defaults.staffing.staff_required),
                website_status: status_setting(
                    &sheet,
                    WEBSITE_STATUS,
                    defaults.staffing.website_status,
                ),
                inventory_system_status: status_setting(
                    &sheet,
                    INVENTORY_STATUS,
                    defaults.staffing.inventory_system_status,
                ),
            },
        }
    }
}

fn project_settings(
    sheet: &KeyValueSheet,
    defaults: ProjectSettings,
    location: &[LabelMatch],
    target: &[LabelMatch],
    paused: &[LabelMatch],
) -> ProjectSettings {
    let target_date = match sheet.value(target) {
        Some(value) => coerce_date(value).or(defaults.target_date),
        None => defaults.target_date,
    };
    let is_paused = match sheet.value(paused) {
        Some(value) => coerce_boolean(value),
        None => defaults.paused,
    };
    let pause_reason = if is_paused {
        sheet.notes(paused).unwrap_or(defaults.pause_reason)
    } else {
        String::new()
    };

    ProjectSettings {
        location: sheet.text(location).unwrap_or(defaults.location),
        target_date,
        paused: is_paused,
        pause_reason,
    }
}

fn status_setting(sheet: &KeyValueSheet, matchers: &[LabelMatch], default: SystemStatus) -> SystemStatus {
    let Some(text) = sheet.text(matchers) else {
        return default;
    };
    match SystemStatus::parse(&text) {
        Some(status) => status,
        None => {
            warn!("unrecognized status '{text}', keeping {}", default.label());
            default
        }
    }
}

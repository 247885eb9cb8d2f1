use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::cell::{CellValue, RawSheet, SheetRow};
use crate::domain::project::Milestone;
use crate::domain::risk::{Rag, Risk, RiskStatus};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at_noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
    on_date(year, month, day).and_hms_opt(12, 0, 0).unwrap()
}

pub fn text(value: &str) -> CellValue {
    CellValue::from(value)
}

pub fn num(value: f64) -> CellValue {
    CellValue::Number(value)
}

/// Builds a sheet the way the workbook reader would: header row first.
pub fn sheet(name: &str, headers: &[&str], rows: Vec<Vec<CellValue>>) -> RawSheet {
    let mut grid = vec![headers.iter().map(|h| text(h)).collect::<Vec<_>>()];
    grid.extend(rows);
    RawSheet::from_grid(name, grid)
}

pub fn table(headers: &[&str], rows: Vec<Vec<CellValue>>) -> Vec<SheetRow> {
    sheet("Sheet1", headers, rows).rows
}

pub fn key_value_rows(label_header: &str, entries: &[(&str, CellValue, &str)]) -> Vec<SheetRow> {
    let rows = entries
        .iter()
        .map(|(label, value, notes)| vec![text(label), value.clone(), text(notes)])
        .collect();
    table(&[label_header, "Value", "Notes"], rows)
}

pub fn milestone(name: &str, status_percent: f64, complete: bool) -> Milestone {
    Milestone {
        name: name.to_string(),
        target_date: None,
        status_percent,
        complete,
        actual_date: None,
        notes: String::new(),
    }
}

pub fn risk(id: &str, rag: Rag, status: RiskStatus, is_blocker: bool, is_pending_decision: bool) -> Risk {
    Risk {
        id: id.to_string(),
        name: format!("Risk {id}"),
        rag,
        description: String::new(),
        mitigation: String::new(),
        status,
        owner: String::new(),
        is_blocker,
        is_pending_decision,
    }
}

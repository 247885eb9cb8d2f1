use chrono::{Local, NaiveDateTime};
use log::{info, warn};

use crate::domain::cell::{RawWorkbook, SheetRow};
use crate::domain::snapshot::{ParseOutcome, Snapshot};
use crate::services::budget_extractor::extract_budget;
use crate::services::capital_extractor::extract_capital;
use crate::services::cash_flow_extractor::extract_cash_flow;
use crate::services::default_data::{
    default_budget, default_capital, default_cash_flow, default_financial, default_operational,
    default_risks, default_showroom, default_snapshot_at, default_warehouse, local_timestamp,
};
use crate::services::financial_extractor::extract_financial;
use crate::services::operational_extractor::extract_operational;
use crate::services::project_extractor::extract_project;
use crate::services::risks_extractor::extract_risks;
use crate::services::settings::WorkbookSettings;
use crate::services::sheet_locator::{
    CAPITAL, CASH_FLOW, COSTS, FINANCIAL, LogicalSheet, RISKS, SETTINGS, SHOWROOM, SUPPLIERS,
    WAREHOUSE,
};
use crate::services::workbook_reader::{WorkbookError, read_workbook};

pub const UNREADABLE_WORKBOOK_MESSAGE: &str = "Error reading workbook, using demo data";

/// Rows of a logical sheet, or `None` when the sheet is missing or has no
/// data rows.
fn present_rows(workbook: &RawWorkbook, logical: LogicalSheet) -> Option<&[SheetRow]> {
    let sheet = workbook.find_sheet(logical)?;
    if sheet.rows.is_empty() {
        warn!("sheet '{}' has no data rows, using default data", sheet.name);
        return None;
    }
    Some(&sheet.rows)
}

fn with_default<T>(name: &str, parsed: Option<T>, default: impl FnOnce() -> T) -> T {
    parsed.unwrap_or_else(|| {
        info!("no {} sheet, using default data", name);
        default()
    })
}

/// Builds a snapshot from an already-read workbook. Every domain whose sheet
/// is missing falls back to its default record; the others still parse.
pub fn assemble_snapshot(workbook: &RawWorkbook, now: NaiveDateTime) -> Snapshot {
    let settings = present_rows(workbook, SETTINGS)
        .map(WorkbookSettings::from_rows)
        .unwrap_or_default();

    let capital = with_default(
        "capital",
        present_rows(workbook, CAPITAL).map(extract_capital),
        default_capital,
    );

    let showroom = with_default(
        "showroom",
        present_rows(workbook, SHOWROOM).map(|rows| extract_project(rows, &settings.showroom, now)),
        || default_showroom(now).paused(settings.showroom.paused, &settings.showroom.pause_reason),
    );

    let warehouse = with_default(
        "warehouse",
        present_rows(workbook, WAREHOUSE)
            .map(|rows| extract_project(rows, &settings.warehouse, now)),
        || default_warehouse(now).paused(settings.warehouse.paused, &settings.warehouse.pause_reason),
    );

    let budget = with_default(
        "costs",
        present_rows(workbook, COSTS).map(extract_budget),
        default_budget,
    );

    let operational = with_default(
        "suppliers",
        present_rows(workbook, SUPPLIERS).map(|rows| extract_operational(rows, &settings.staffing)),
        default_operational,
    );

    let financial = with_default(
        "financial",
        present_rows(workbook, FINANCIAL).map(|rows| extract_financial(rows, settings.revenue_mix)),
        || default_financial().with_mix(settings.revenue_mix),
    );

    let risks = with_default(
        "risks",
        present_rows(workbook, RISKS).map(extract_risks),
        default_risks,
    );

    let cash_flow = with_default(
        "cash flow",
        present_rows(workbook, CASH_FLOW)
            .map(|rows| extract_cash_flow(rows, capital.remaining, capital.burn_rate)),
        || default_cash_flow(capital.remaining, capital.burn_rate),
    );

    Snapshot {
        capital,
        showroom,
        warehouse,
        budget,
        operational,
        financial,
        risks,
        cash_flow,
        last_updated: local_timestamp(now),
    }
}

pub fn parse_workbook_bytes_at(bytes: &[u8], now: NaiveDateTime) -> Result<Snapshot, WorkbookError> {
    let workbook = read_workbook(bytes)?;
    info!("parsing workbook with sheets {:?}", workbook.sheet_names());
    Ok(assemble_snapshot(&workbook, now))
}

/// Parses a workbook buffer; fails only when the buffer cannot be opened.
pub fn parse_workbook_bytes(bytes: &[u8]) -> Result<Snapshot, WorkbookError> {
    parse_workbook_bytes_at(bytes, Local::now().naive_local())
}

pub fn parse_at(bytes: &[u8], now: NaiveDateTime) -> ParseOutcome {
    match parse_workbook_bytes_at(bytes, now) {
        Ok(snapshot) => ParseOutcome::from_excel(snapshot),
        Err(err) => {
            warn!("{}, falling back to default data", err);
            ParseOutcome::from_default(default_snapshot_at(now), UNREADABLE_WORKBOOK_MESSAGE)
        }
    }
}

/// Never fails: a buffer that cannot be read yields the default snapshot
/// together with an advisory message.
pub fn parse(bytes: &[u8]) -> ParseOutcome {
    parse_at(bytes, Local::now().naive_local())
}

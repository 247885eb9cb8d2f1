use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::domain::cell::CellValue;
use crate::domain::operational::Operational;
use crate::domain::project::Project;
use crate::domain::risk::RiskStatus;
use crate::domain::snapshot::Snapshot;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to write template workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

struct TemplateSheet {
    name: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<CellValue>>,
}

fn text(value: &str) -> CellValue {
    CellValue::from(value)
}

fn yes_no(flag: bool) -> CellValue {
    text(if flag { "Yes" } else { "No" })
}

fn date(value: Option<NaiveDate>) -> CellValue {
    value
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(CellValue::Date)
        .unwrap_or_default()
}

fn capital_sheet(snapshot: &Snapshot) -> TemplateSheet {
    let capital = &snapshot.capital;
    TemplateSheet {
        name: "Capital_Investment",
        headers: &["Metric", "Value", "Notes"],
        rows: vec![
            vec![text("Total Capital Raised"), capital.total_raised.into(), text("")],
            vec![text("Capital Deployed"), capital.deployed.into(), text("")],
            vec![text("Capital Remaining"), capital.remaining.into(), text("")],
            vec![text("Monthly Burn Rate"), capital.burn_rate.into(), text("")],
            vec![
                text("Runway (Months)"),
                (capital.runway_months as f64).into(),
                text("Calculated from remaining/burn rate"),
            ],
            vec![
                text("Next Major Expense"),
                capital.next_major_expense.amount.into(),
                text(&capital.next_major_expense.description),
            ],
        ],
    }
}

fn costs_sheet(snapshot: &Snapshot) -> TemplateSheet {
    let budget = &snapshot.budget;
    let mut rows: Vec<Vec<CellValue>> = budget
        .by_category
        .iter()
        .map(|c| {
            vec![
                text(&c.category),
                c.budgeted.into(),
                c.actual.into(),
                c.forecast.into(),
                text(""),
            ]
        })
        .collect();
    rows.push(vec![
        text("TOTAL"),
        budget.budgeted_total.into(),
        budget.actual_spend.into(),
        budget.forecast.into(),
        text(""),
    ]);

    TemplateSheet {
        name: "Costs_Tracker",
        headers: &["Category", "Budgeted", "Actual", "Forecast", "Notes"],
        rows,
    }
}

fn progress_sheet(name: &'static str, project: &Project) -> TemplateSheet {
    TemplateSheet {
        name,
        headers: &["Milestone", "Target Date", "Status %", "Complete", "Actual Date", "Notes"],
        rows: project
            .milestones
            .iter()
            .map(|m| {
                vec![
                    text(&m.name),
                    date(m.target_date),
                    m.status_percent.into(),
                    yes_no(m.complete),
                    date(m.actual_date),
                    text(&m.notes),
                ]
            })
            .collect(),
    }
}

/// Only supplier counts are kept in a snapshot, so the rows are numbered
/// placeholders carrying the confirmed count and the product total.
fn suppliers_sheet(operational: &Operational) -> TemplateSheet {
    let rows = (0..operational.suppliers_total)
        .map(|index| {
            let confirmed = index < operational.suppliers_confirmed;
            let products = if index == 0 {
                operational.products_in_catalogue
            } else {
                0.0
            };
            vec![
                text(&format!("Supplier {}", index + 1)),
                text(if confirmed { "Confirmed" } else { "Pending" }),
                products.into(),
                text(""),
                text(""),
            ]
        })
        .collect();

    TemplateSheet {
        name: "Suppliers",
        headers: &["Supplier", "Status", "Product Count", "Category", "Notes"],
        rows,
    }
}

fn financial_sheet(snapshot: &Snapshot) -> TemplateSheet {
    TemplateSheet {
        name: "Financial_Projections",
        headers: &["Month", "Revenue Target", "Is Break Even", "Notes"],
        rows: snapshot
            .financial
            .revenue_projections
            .iter()
            .map(|p| vec![text(&p.month), p.revenue.into(), yes_no(p.is_break_even), text("")])
            .collect(),
    }
}

fn risks_sheet(snapshot: &Snapshot) -> TemplateSheet {
    TemplateSheet {
        name: "Risks_Issues",
        headers: &[
            "Risk ID",
            "Risk Name",
            "RAG",
            "Description",
            "Mitigation",
            "Status",
            "Owner",
            "Is Blocker",
            "Pending Decision",
        ],
        rows: snapshot
            .risks
            .items
            .iter()
            .map(|r| {
                vec![
                    text(&r.id),
                    text(&r.name),
                    text(r.rag.label()),
                    text(&r.description),
                    text(&r.mitigation),
                    text(match r.status {
                        RiskStatus::Open => "Open",
                        RiskStatus::Closed => "Closed",
                    }),
                    text(&r.owner),
                    yes_no(r.is_blocker),
                    yes_no(r.is_pending_decision),
                ]
            })
            .collect(),
    }
}

fn settings_sheet(snapshot: &Snapshot) -> TemplateSheet {
    let (showroom, warehouse) = (&snapshot.showroom, &snapshot.warehouse);
    let financial = &snapshot.financial;
    let operational = &snapshot.operational;
    let status_options = "Options: Not Started, In Development, Live, Planned";

    TemplateSheet {
        name: "Settings",
        headers: &["Setting", "Value", "Notes"],
        rows: vec![
            vec![text("Showroom Location"), text(&showroom.location), text("Display name")],
            vec![text("Showroom Target Date"), date(showroom.target_date), text("Target completion")],
            vec![text("Showroom Paused"), yes_no(showroom.is_paused), text(&showroom.pause_reason)],
            vec![text("Warehouse Location"), text(&warehouse.location), text("Display name")],
            vec![text("Warehouse Target Date"), date(warehouse.target_date), text("Target completion")],
            vec![text("Warehouse Paused"), yes_no(warehouse.is_paused), text(&warehouse.pause_reason)],
            vec![text("Gross Margin Target"), financial.gross_margin_target.into(), text("Percentage")],
            vec![text("B2B Split"), financial.b2b_split.into(), text("Percentage of revenue")],
            vec![text("B2C Split"), financial.b2c_split.into(), text("Percentage of revenue")],
            vec![text("Staff Required"), operational.staff_required.into(), text("Total headcount needed")],
            vec![text("Staff Hired"), operational.staff_hired.into(), text("Current headcount")],
            vec![
                text("Website Status"),
                text(operational.website_status.label()),
                text(status_options),
            ],
            vec![
                text("Inventory System Status"),
                text(operational.inventory_system_status.label()),
                text(status_options),
            ],
        ],
    }
}

fn cash_flow_sheet(snapshot: &Snapshot) -> TemplateSheet {
    let mut rows = Vec::new();
    for month in &snapshot.cash_flow.projections {
        let last = month.details.len().saturating_sub(1);
        for (index, item) in month.details.iter().enumerate() {
            rows.push(vec![
                text(if index == 0 { month.month.as_str() } else { "" }),
                text(&item.item),
                item.net.into(),
                item.vat.into(),
                item.gross.into(),
                yes_no(item.vat_reclaimable),
                if index == last {
                    month.closing_balance.into()
                } else {
                    CellValue::Empty
                },
            ]);
        }
    }

    TemplateSheet {
        name: "Monthly_Cashflow",
        headers: &["Month", "Item", "Net", "VAT", "Gross", "VAT Reclaimable", "Closing Balance"],
        rows,
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    date_format: &Format,
) -> Result<(), XlsxError> {
    match value {
        CellValue::Empty => {}
        CellValue::Text(text) if text.is_empty() => {}
        CellValue::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
        CellValue::Number(number) => {
            worksheet.write_number(row, col, *number)?;
        }
        CellValue::Bool(flag) => {
            worksheet.write_boolean(row, col, *flag)?;
        }
        CellValue::Date(datetime) => {
            let excel_date = ExcelDateTime::from_ymd(
                datetime.year() as u16,
                datetime.month() as u8,
                datetime.day() as u8,
            )?;
            worksheet.write_datetime_with_format(row, col, &excel_date, date_format)?;
        }
    }
    Ok(())
}

fn write_sheet(workbook: &mut Workbook, sheet: &TemplateSheet) -> Result<(), TemplateError> {
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name)?;
    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, if col == 0 { 30 } else { 16 })?;
    }
    for (index, row) in sheet.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, index as u32 + 1, col as u16, value, &date_format)?;
        }
    }
    Ok(())
}

/// Renders a snapshot as an `.xlsx` workbook laid out the way the parser
/// expects to find it.
pub fn write_template(snapshot: &Snapshot) -> Result<Vec<u8>, TemplateError> {
    let sheets = [
        capital_sheet(snapshot),
        costs_sheet(snapshot),
        progress_sheet("Showroom_Progress", &snapshot.showroom),
        progress_sheet("Warehouse_Progress", &snapshot.warehouse),
        suppliers_sheet(&snapshot.operational),
        financial_sheet(snapshot),
        risks_sheet(snapshot),
        settings_sheet(snapshot),
        cash_flow_sheet(snapshot),
    ];

    let mut workbook = Workbook::new();
    for sheet in &sheets {
        write_sheet(&mut workbook, sheet)?;
    }
    Ok(workbook.save_to_buffer()?)
}

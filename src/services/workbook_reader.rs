use std::io::Cursor;
use std::panic::{AssertUnwindSafe, catch_unwind};

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use log::{debug, warn};
use thiserror::Error;

use crate::domain::cell::{CellValue, RawSheet, RawWorkbook};
use crate::services::coercion::{excel_serial_to_datetime, parse_date_text};

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("failed to open workbook: {0}")]
    Open(#[from] calamine::Error),
    #[error("workbook reader aborted on malformed input")]
    Aborted,
}

/// Converts one spreadsheet cell into the closed cell model.
pub fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Bool(flag) => CellValue::Bool(*flag),
        Data::Int(number) => CellValue::Number(*number as f64),
        Data::Float(number) => CellValue::Number(*number),
        Data::String(text) => CellValue::Text(text.clone()),
        Data::DateTime(serial) if serial.is_duration() => CellValue::Number(serial.as_f64()),
        Data::DateTime(serial) => serial
            .as_datetime()
            .or_else(|| excel_serial_to_datetime(serial.as_f64()))
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(serial.as_f64())),
        Data::DateTimeIso(text) => parse_date_text(text)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(text.clone())),
        Data::DurationIso(text) => CellValue::Text(text.clone()),
    }
}

/// Opens an `.xlsx`/`.xls` buffer and reads every sheet into rows keyed by
/// header. Sheets that fail to read are left out.
pub fn read_workbook(bytes: &[u8]) -> Result<RawWorkbook, WorkbookError> {
    catch_unwind(AssertUnwindSafe(|| read_sheets(bytes))).map_err(|_| WorkbookError::Aborted)?
}

fn read_sheets(bytes: &[u8]) -> Result<RawWorkbook, WorkbookError> {
    let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let mut workbook = RawWorkbook::new();

    for name in sheets.sheet_names() {
        match sheets.worksheet_range(&name) {
            Ok(range) => {
                let grid = range.rows().map(|row| row.iter().map(convert_cell).collect::<Vec<_>>());
                let sheet = RawSheet::from_grid(&name, grid);
                debug!("read sheet '{}' with {} data rows", name, sheet.rows.len());
                workbook.sheets.push(sheet);
            }
            Err(err) => warn!("skipping unreadable sheet '{}': {}", name, err),
        }
    }

    Ok(workbook)
}

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// A spreadsheet cell after it has been read from the workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One data row of a sheet, keyed by the header text of its column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    cells: HashMap<String, CellValue>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: &str, value: CellValue) {
        self.cells.insert(header.to_string(), value);
    }

    /// Looks a cell up by the first column alias that resolves, trying the
    /// exact header before a normalized comparison.
    pub fn get(&self, aliases: &[&str]) -> Option<&CellValue> {
        for alias in aliases {
            if let Some(value) = self.cells.get(*alias) {
                return Some(value);
            }
            let wanted = normalize_header(alias);
            if let Some((_, value)) = self
                .cells
                .iter()
                .find(|(header, _)| normalize_header(header) == wanted)
            {
                return Some(value);
            }
        }
        None
    }

    /// Like [`SheetRow::get`] but yields [`CellValue::Empty`] for a missing column.
    pub fn cell(&self, aliases: &[&str]) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.get(aliases).unwrap_or(EMPTY)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_empty)
    }
}

pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

impl RawSheet {
    /// Builds a sheet from a cell grid. The first row with any content is the
    /// header row; fully blank rows below it are dropped.
    pub fn from_grid<I>(name: &str, grid: I) -> Self
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        let mut grid = grid.into_iter().skip_while(|row| row.iter().all(CellValue::is_empty));
        let mut headers: Vec<String> = match grid.next() {
            Some(header_row) => header_row.iter().map(header_text).collect(),
            None => Vec::new(),
        };
        // Repeated header text: the leftmost column keeps the name.
        for index in 1..headers.len() {
            if headers[..index].contains(&headers[index]) {
                headers[index].clear();
            }
        }

        let mut rows = Vec::new();
        for cells in grid {
            let mut row = SheetRow::new();
            for (header, value) in headers.iter().zip(cells) {
                if header.is_empty() {
                    continue;
                }
                row.insert(header, value);
            }
            if !row.is_blank() {
                rows.push(row);
            }
        }

        Self {
            name: name.to_string(),
            rows,
        }
    }
}

fn header_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(text) => text.trim().to_string(),
        CellValue::Number(number) => number.to_string(),
        CellValue::Bool(flag) => flag.to_string(),
        CellValue::Date(date) => date.date().to_string(),
        CellValue::Empty => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawWorkbook {
    pub sheets: Vec<RawSheet>,
}

impl RawWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

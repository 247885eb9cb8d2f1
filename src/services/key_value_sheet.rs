use crate::domain::cell::{CellValue, SheetRow};
use crate::services::coercion::{coerce_number, coerce_text, parse_number};

const VALUE_COLUMN: &[&str] = &["Value", "Amount"];
const NOTES_COLUMN: &[&str] = &["Notes", "Note", "Comments"];

/// Predicate on a row label, compared case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    Contains(&'static str),
    ContainsAll(&'static [&'static str]),
}

impl LabelMatch {
    pub fn matches(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        match self {
            LabelMatch::Contains(phrase) => label.contains(&phrase.to_lowercase()),
            LabelMatch::ContainsAll(phrases) => phrases
                .iter()
                .all(|phrase| label.contains(&phrase.to_lowercase())),
        }
    }
}

/// A "label, value, notes" sheet where rows are picked by their label text
/// rather than by position.
pub struct KeyValueSheet<'a> {
    rows: &'a [SheetRow],
    label_column: &'static [&'static str],
}

impl<'a> KeyValueSheet<'a> {
    pub fn new(rows: &'a [SheetRow], label_column: &'static [&'static str]) -> Self {
        Self { rows, label_column }
    }

    /// The first row, in sheet order, matched by the earliest matcher that
    /// matches anything.
    pub fn find(&self, matchers: &[LabelMatch]) -> Option<&'a SheetRow> {
        let label_column = self.label_column;
        matchers.iter().find_map(|matcher| {
            self.rows.iter().find(|row| {
                let label = coerce_text(row.cell(label_column));
                !label.is_empty() && matcher.matches(&label)
            })
        })
    }

    pub fn value(&self, matchers: &[LabelMatch]) -> Option<&'a CellValue> {
        self.find(matchers)
            .map(|row| row.cell(VALUE_COLUMN))
            .filter(|value| !value.is_empty())
    }

    /// Zero when no row matches or its value is not a number.
    pub fn number(&self, matchers: &[LabelMatch]) -> f64 {
        self.value(matchers).map(coerce_number).unwrap_or(0.0)
    }

    /// `None` unless a matching row carries a numeric value.
    pub fn explicit_number(&self, matchers: &[LabelMatch]) -> Option<f64> {
        self.value(matchers).and_then(parse_number)
    }

    pub fn text(&self, matchers: &[LabelMatch]) -> Option<String> {
        self.value(matchers)
            .map(coerce_text)
            .filter(|text| !text.is_empty())
    }

    pub fn notes(&self, matchers: &[LabelMatch]) -> Option<String> {
        self.find(matchers)
            .map(|row| coerce_text(row.cell(NOTES_COLUMN)))
            .filter(|text| !text.is_empty())
    }
}

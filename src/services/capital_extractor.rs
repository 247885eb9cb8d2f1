use crate::domain::capital::{Capital, NextExpense};
use crate::domain::cell::SheetRow;
use crate::services::key_value_sheet::{KeyValueSheet, LabelMatch};

const METRIC: &[&str] = &["Metric", "Item", "Name"];

const TOTAL_RAISED: &[LabelMatch] = &[
    LabelMatch::Contains("total raised"),
    LabelMatch::Contains("capital raised"),
];
const DEPLOYED: &[LabelMatch] = &[
    LabelMatch::Contains("deployed"),
    LabelMatch::Contains("capital deployed"),
];
const BURN_RATE: &[LabelMatch] = &[
    LabelMatch::Contains("burn rate"),
    LabelMatch::Contains("monthly burn"),
];
const REMAINING: &[LabelMatch] = &[LabelMatch::Contains("remaining")];
const NEXT_EXPENSE: &[LabelMatch] = &[LabelMatch::ContainsAll(&["next", "expense"])];

pub const DEFAULT_NEXT_EXPENSE: &str = "First Stock Order";

pub fn extract_capital(rows: &[SheetRow]) -> Capital {
    let sheet = KeyValueSheet::new(rows, METRIC);

    let next_major_expense = NextExpense {
        description: sheet
            .notes(NEXT_EXPENSE)
            .unwrap_or_else(|| DEFAULT_NEXT_EXPENSE.to_string()),
        amount: sheet.number(NEXT_EXPENSE),
    };

    Capital::new(
        sheet.number(TOTAL_RAISED),
        sheet.number(DEPLOYED),
        sheet.explicit_number(REMAINING),
        sheet.number(BURN_RATE),
        next_major_expense,
    )
}

use crate::domain::budget::{Budget, CategorySpend};
use crate::domain::cell::SheetRow;
use crate::services::coercion::{coerce_number, coerce_text};

const CATEGORY: &[&str] = &["Category", "Item", "Cost"];
const BUDGETED: &[&str] = &["Budgeted", "Budget"];
const ACTUAL: &[&str] = &["Actual", "Spent", "Actual Spend"];
const FORECAST: &[&str] = &["Forecast", "Projected"];

/// A summary row labelled "Total" would double-count every category.
fn is_category_row(category: &str) -> bool {
    !category.is_empty() && !category.eq_ignore_ascii_case("total")
}

pub fn extract_budget(rows: &[SheetRow]) -> Budget {
    let by_category = rows
        .iter()
        .filter_map(|row| {
            let category = coerce_text(row.cell(CATEGORY));
            if !is_category_row(&category) {
                return None;
            }
            let budgeted = coerce_number(row.cell(BUDGETED));
            let actual = coerce_number(row.cell(ACTUAL));
            // An empty or zero forecast means "on track with actuals".
            let forecast = coerce_number(row.cell(FORECAST));
            let forecast = if forecast == 0.0 { actual } else { forecast };
            Some(CategorySpend::new(&category, budgeted, actual, forecast))
        })
        .collect();

    Budget::from_categories(by_category)
}

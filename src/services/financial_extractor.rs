use crate::domain::cell::SheetRow;
use crate::domain::financial::{Financial, MonthlyProjection, RevenueMix};
use crate::services::coercion::{coerce_boolean, coerce_number, coerce_text};

const MONTH: &[&str] = &["Month", "Period"];
const REVENUE: &[&str] = &["Revenue Target", "Revenue", "Target"];
const BREAK_EVEN: &[&str] = &["Is Break Even", "Break Even", "Breakeven"];

pub fn extract_projections(rows: &[SheetRow]) -> Vec<MonthlyProjection> {
    rows.iter()
        .filter_map(|row| {
            let month = coerce_text(row.cell(MONTH));
            let revenue = row.get(REVENUE)?;
            if month.is_empty() || revenue.is_empty() {
                return None;
            }
            Some(MonthlyProjection {
                month,
                revenue: coerce_number(revenue),
                is_break_even: coerce_boolean(row.cell(BREAK_EVEN)),
            })
        })
        .collect()
}

pub fn extract_financial(rows: &[SheetRow], mix: RevenueMix) -> Financial {
    Financial::from_projections(extract_projections(rows), mix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::CellValue;
    use crate::services::settings::WorkbookSettings;
    use crate::test_support::{num, table, text};

    const HEADERS: &[&str] = &["Month", "Revenue Target", "Is Break Even", "Notes"];

    fn month(label: &str, revenue: f64, break_even: &str) -> Vec<CellValue> {
        vec![text(label), num(revenue), text(break_even), text("")]
    }

    #[test]
    fn year_one_target_is_the_sum_of_projections() {
        let rows = table(
            HEADERS,
            vec![
                month("Month 1", 15000.0, "No"),
                month("Month 2", 22000.0, "No"),
                month("Month 3", 35000.0, "Yes"),
                month("Month 4", 48000.0, "yes"),
            ],
        );

        let financial = extract_financial(&rows, WorkbookSettings::default().revenue_mix);

        assert_eq!(financial.revenue_projections.len(), 4);
        assert_eq!(financial.month1_target, 15000.0);
        assert_eq!(financial.year1_target, 120000.0);
        assert_eq!(financial.break_even_month, "Month 3");
        assert_eq!(financial.gross_margin_target, 45.0);
        assert_eq!(financial.b2b_split, 60.0);
        assert_eq!(financial.b2c_split, 40.0);
    }

    #[test]
    fn rows_without_month_or_revenue_are_dropped() {
        let rows = table(
            HEADERS,
            vec![
                vec![CellValue::Empty, num(1000.0), text("No"), text("orphan")],
                vec![text("Month 1"), CellValue::Empty, text("No"), text("no target yet")],
                month("Month 2", 22000.0, "No"),
            ],
        );

        let projections = extract_projections(&rows);

        assert_eq!(projections.len(), 1);
        assert_eq!(projections[0].month, "Month 2");
    }

    #[test]
    fn without_a_flag_break_even_is_month_9() {
        let rows = table(HEADERS, vec![month("Month 1", 15000.0, "No")]);
        let financial = extract_financial(&rows, WorkbookSettings::default().revenue_mix);
        assert_eq!(financial.break_even_month, "Month 9");
    }

    #[test]
    fn unparseable_revenue_counts_as_zero() {
        let rows = table(
            HEADERS,
            vec![
                vec![text("Month 1"), text("TBC"), CellValue::Bool(true), text("")],
                month("Month 2", 22000.0, "No"),
            ],
        );

        let financial = extract_financial(&rows, WorkbookSettings::default().revenue_mix);

        assert_eq!(financial.month1_target, 0.0);
        assert_eq!(financial.year1_target, 22000.0);
        assert_eq!(financial.break_even_month, "Month 1");
    }
}

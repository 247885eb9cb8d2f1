use crate::domain::cash_flow::{CashFlow, MonthlyOutgoing, OutgoingItem};
use crate::domain::cell::SheetRow;
use crate::services::coercion::{coerce_boolean, coerce_number, coerce_text, parse_number};

const MONTH: &[&str] = &["Month", "Period"];
const ITEM: &[&str] = &["Item", "Description"];
const NET: &[&str] = &["Net", "Net Amount"];
const VAT: &[&str] = &["VAT", "VAT Amount", "Tax"];
const GROSS: &[&str] = &["Gross", "Gross Amount", "Total"];
const VAT_RECLAIMABLE: &[&str] = &["VAT Reclaimable", "Reclaimable"];
const CLOSING_BALANCE: &[&str] = &["Closing Balance", "Balance"];

struct MonthRows {
    month: String,
    details: Vec<OutgoingItem>,
    closing_balance: Option<f64>,
}

/// Reads precomputed monthly outgoings. A row with no month continues the
/// month above it; closing balances missing from the sheet are run down
/// from `opening_balance`.
pub fn extract_cash_flow(rows: &[SheetRow], opening_balance: f64, burn_rate: f64) -> CashFlow {
    let mut months: Vec<MonthRows> = Vec::new();

    for row in rows {
        let month = coerce_text(row.cell(MONTH));
        let starts_new_month = !month.is_empty() && months.last().is_none_or(|m| m.month != month);
        if starts_new_month {
            months.push(MonthRows {
                month,
                details: Vec::new(),
                closing_balance: None,
            });
        }
        let Some(current) = months.last_mut() else {
            continue;
        };

        if let Some(balance) = parse_number(row.cell(CLOSING_BALANCE)) {
            current.closing_balance = Some(balance);
        }

        let item = coerce_text(row.cell(ITEM));
        if item.is_empty() {
            continue;
        }
        let net = coerce_number(row.cell(NET));
        let vat = coerce_number(row.cell(VAT));
        let mut outgoing = OutgoingItem::new(&item, net, vat, coerce_boolean(row.cell(VAT_RECLAIMABLE)));
        if let Some(gross) = parse_number(row.cell(GROSS)) {
            outgoing.gross = gross;
        }
        current.details.push(outgoing);
    }

    let mut balance = opening_balance;
    let projections = months
        .into_iter()
        .map(|month| {
            let outgoing = MonthlyOutgoing::new(&month.month, month.details, 0.0);
            balance = month
                .closing_balance
                .unwrap_or(balance - outgoing.gross_total);
            MonthlyOutgoing {
                closing_balance: balance,
                ..outgoing
            }
        })
        .collect();

    CashFlow {
        projections,
        burn_rate,
    }
}

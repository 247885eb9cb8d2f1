use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingItem {
    pub item: String,
    pub net: f64,
    pub vat: f64,
    pub gross: f64,
    pub vat_reclaimable: bool,
}

impl OutgoingItem {
    pub fn new(item: &str, net: f64, vat: f64, vat_reclaimable: bool) -> Self {
        Self {
            item: item.to_string(),
            net,
            vat,
            gross: net + vat,
            vat_reclaimable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOutgoing {
    pub month: String,
    pub details: Vec<OutgoingItem>,
    pub net_total: f64,
    pub vat_total: f64,
    pub gross_total: f64,
    pub closing_balance: f64,
}

impl MonthlyOutgoing {
    pub fn new(month: &str, details: Vec<OutgoingItem>, closing_balance: f64) -> Self {
        Self {
            month: month.to_string(),
            net_total: details.iter().map(|d| d.net).sum(),
            vat_total: details.iter().map(|d| d.vat).sum(),
            gross_total: details.iter().map(|d| d.gross).sum(),
            details,
            closing_balance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub projections: Vec<MonthlyOutgoing>,
    pub burn_rate: f64,
}

impl CashFlow {
    /// Builds monthly outgoings whose closing balances run down from
    /// `opening_balance` by each month's gross total.
    pub fn running_from(
        opening_balance: f64,
        months: Vec<(String, Vec<OutgoingItem>)>,
        burn_rate: f64,
    ) -> Self {
        let mut balance = opening_balance;
        let projections = months
            .into_iter()
            .map(|(month, details)| {
                let outgoing = MonthlyOutgoing::new(&month, details, 0.0);
                balance -= outgoing.gross_total;
                MonthlyOutgoing {
                    closing_balance: balance,
                    ..outgoing
                }
            })
            .collect();

        Self {
            projections,
            burn_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_totals_sum_their_line_items() {
        let month = MonthlyOutgoing::new(
            "Dec 2025",
            vec![
                OutgoingItem::new("Q1 Rent", 32097.0, 6419.4, true),
                OutgoingItem::new("Insurance", 4800.0, 0.0, false),
            ],
            1000.0,
        );

        assert_eq!(month.net_total, 36897.0);
        assert!((month.vat_total - 6419.4).abs() < 1e-9);
        assert!((month.gross_total - 43316.4).abs() < 1e-9);
        assert_eq!(month.closing_balance, 1000.0);
    }

    #[test]
    fn closing_balance_runs_down_month_by_month() {
        let cash_flow = CashFlow::running_from(
            10000.0,
            vec![
                ("Jan".to_string(), vec![OutgoingItem::new("Rates", 1000.0, 0.0, false)]),
                ("Feb".to_string(), vec![OutgoingItem::new("Rent", 2000.0, 400.0, true)]),
            ],
            1700.0,
        );

        assert_eq!(cash_flow.projections[0].closing_balance, 9000.0);
        assert_eq!(cash_flow.projections[1].closing_balance, 6600.0);
        assert_eq!(cash_flow.burn_rate, 1700.0);
    }
}

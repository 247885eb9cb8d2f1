use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextExpense {
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capital {
    pub total_raised: f64,
    pub deployed: f64,
    pub deployed_percent: f64,
    pub remaining: f64,
    pub burn_rate: f64,
    pub runway_months: i64,
    pub next_major_expense: NextExpense,
}

impl Capital {
    /// Builds the capital position, deriving the percentage deployed, the
    /// remaining balance (unless given explicitly) and the runway.
    pub fn new(
        total_raised: f64,
        deployed: f64,
        remaining: Option<f64>,
        burn_rate: f64,
        next_major_expense: NextExpense,
    ) -> Self {
        let remaining = remaining.unwrap_or(total_raised - deployed);
        let deployed_percent = if total_raised > 0.0 {
            deployed / total_raised * 100.0
        } else {
            0.0
        };
        let runway_months = if burn_rate > 0.0 {
            (remaining / burn_rate).floor() as i64
        } else {
            0
        };

        Self {
            total_raised,
            deployed,
            deployed_percent,
            remaining,
            burn_rate,
            runway_months,
            next_major_expense,
        }
    }
}

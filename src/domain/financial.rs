use serde::{Deserialize, Serialize};

pub const DEFAULT_BREAK_EVEN_MONTH: &str = "Month 9";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    pub month: String,
    pub revenue: f64,
    pub is_break_even: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueMix {
    pub gross_margin_target: f64,
    pub b2b_split: f64,
    pub b2c_split: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    pub revenue_projections: Vec<MonthlyProjection>,
    pub break_even_month: String,
    pub month1_target: f64,
    pub year1_target: f64,
    pub gross_margin_target: f64,
    pub b2b_split: f64,
    pub b2c_split: f64,
}

impl Financial {
    pub fn from_projections(revenue_projections: Vec<MonthlyProjection>, mix: RevenueMix) -> Self {
        let break_even_month = revenue_projections
            .iter()
            .find(|p| p.is_break_even)
            .map(|p| p.month.clone())
            .unwrap_or_else(|| DEFAULT_BREAK_EVEN_MONTH.to_string());
        let month1_target = revenue_projections.first().map(|p| p.revenue).unwrap_or(0.0);
        let year1_target = revenue_projections.iter().map(|p| p.revenue).sum();

        Self {
            revenue_projections,
            break_even_month,
            month1_target,
            year1_target,
            gross_margin_target: mix.gross_margin_target,
            b2b_split: mix.b2b_split,
            b2c_split: mix.b2c_split,
        }
    }

    pub fn with_mix(mut self, mix: RevenueMix) -> Self {
        self.gross_margin_target = mix.gross_margin_target;
        self.b2b_split = mix.b2b_split;
        self.b2c_split = mix.b2c_split;
        self
    }
}

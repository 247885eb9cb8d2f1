use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub category: String,
    pub budgeted: f64,
    pub actual: f64,
    pub forecast: f64,
    pub variance: f64,
    pub variance_percent: f64,
}

impl CategorySpend {
    pub fn new(category: &str, budgeted: f64, actual: f64, forecast: f64) -> Self {
        let (variance, variance_percent) = variance_of(budgeted, actual);
        Self {
            category: category.to_string(),
            budgeted,
            actual,
            forecast,
            variance,
            variance_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub budgeted_total: f64,
    pub actual_spend: f64,
    pub variance: f64,
    pub variance_percent: f64,
    pub forecast: f64,
    pub by_category: Vec<CategorySpend>,
}

impl Budget {
    /// Aggregates are taken over the summed totals, never over per-row percentages.
    pub fn from_categories(by_category: Vec<CategorySpend>) -> Self {
        let budgeted_total: f64 = by_category.iter().map(|c| c.budgeted).sum();
        let actual_spend: f64 = by_category.iter().map(|c| c.actual).sum();
        let forecast: f64 = by_category.iter().map(|c| c.forecast).sum();
        let (variance, variance_percent) = variance_of(budgeted_total, actual_spend);

        Self {
            budgeted_total,
            actual_spend,
            variance,
            variance_percent,
            forecast,
            by_category,
        }
    }
}

fn variance_of(budgeted: f64, actual: f64) -> (f64, f64) {
    let variance = budgeted - actual;
    let variance_percent = if budgeted > 0.0 {
        variance / budgeted * 100.0
    } else {
        0.0
    };
    (variance, variance_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_variance_is_budget_minus_actual() {
        let spend = CategorySpend::new("Showroom Fit-out", 65000.0, 22000.0, 62000.0);
        assert_eq!(spend.variance, 43000.0);
        assert!((spend.variance_percent - 66.153846).abs() < 1e-4);
    }

    #[test]
    fn unbudgeted_category_has_zero_variance_percent() {
        let spend = CategorySpend::new("Working Capital", 0.0, 34000.0, 40000.0);
        assert_eq!(spend.variance, -34000.0);
        assert_eq!(spend.variance_percent, 0.0);
    }

    #[test]
    fn aggregate_variance_uses_totals() {
        let budget = Budget::from_categories(vec![
            CategorySpend::new("A", 100.0, 50.0, 100.0),
            CategorySpend::new("B", 300.0, 350.0, 360.0),
        ]);

        assert_eq!(budget.budgeted_total, 400.0);
        assert_eq!(budget.actual_spend, 400.0);
        assert_eq!(budget.forecast, 460.0);
        assert_eq!(budget.variance, 0.0);
        assert_eq!(budget.variance_percent, 0.0);
    }

    #[test]
    fn empty_budget_is_all_zero() {
        let budget = Budget::from_categories(vec![]);
        assert_eq!(budget.budgeted_total, 0.0);
        assert_eq!(budget.variance_percent, 0.0);
        assert!(budget.by_category.is_empty());
    }
}

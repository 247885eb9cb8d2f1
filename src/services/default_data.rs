use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::domain::budget::{Budget, CategorySpend};
use crate::domain::capital::{Capital, NextExpense};
use crate::domain::cash_flow::{CashFlow, OutgoingItem};
use crate::domain::financial::{Financial, MonthlyProjection};
use crate::domain::operational::{Operational, SystemStatus};
use crate::domain::project::{Milestone, Project};
use crate::domain::risk::{Rag, Risk, RiskStatus, Risks};
use crate::domain::snapshot::Snapshot;
use crate::services::settings::WorkbookSettings;

const TOTAL_RAISED: f64 = 625000.0;
const BURN_RATE: f64 = 17000.0;

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn milestone(
    name: &str,
    target_date: Option<NaiveDate>,
    status_percent: f64,
    actual_date: Option<NaiveDate>,
    notes: &str,
) -> Milestone {
    Milestone {
        name: name.to_string(),
        target_date,
        status_percent,
        complete: actual_date.is_some(),
        actual_date,
        notes: notes.to_string(),
    }
}

pub fn default_capital() -> Capital {
    Capital::new(
        TOTAL_RAISED,
        0.0,
        None,
        BURN_RATE,
        NextExpense {
            description: "Warehouse Initial Payment (Due Dec 19th)".to_string(),
            amount: 245176.0,
        },
    )
}

pub fn default_showroom(now: NaiveDateTime) -> Project {
    let settings = WorkbookSettings::default().showroom;
    let milestones = vec![
        milestone("Lease Agreement Signed", date(2025, 3, 1), 100.0, date(2025, 2, 25), ""),
        milestone(
            "Landlord Scope Complete",
            date(2025, 4, 30),
            100.0,
            date(2025, 4, 15),
            "Landlord finished his works",
        ),
        milestone("Contractor Appointed", date(2025, 6, 1), 100.0, date(2025, 5, 20), ""),
        milestone(
            "1st Fix In Progress",
            date(2026, 1, 15),
            40.0,
            None,
            "Current standstill - expected complete in 1.5 months",
        ),
        milestone("2nd Fix", date(2026, 3, 1), 0.0, None, "TBC - follows 1st fix"),
        milestone("Fixtures & Displays", date(2026, 5, 1), 0.0, None, ""),
        milestone("Showroom Launch", date(2026, 6, 1), 0.0, None, ""),
    ];

    Project::new(&settings.location, settings.target_date, milestones, now)
        .paused(settings.paused, &settings.pause_reason)
}

pub fn default_warehouse(now: NaiveDateTime) -> Project {
    let settings = WorkbookSettings::default().warehouse;
    let milestones = vec![
        milestone("Lease Agreement Signed", date(2025, 6, 1), 100.0, date(2025, 5, 28), ""),
        milestone("Refurb Design Approved", date(2025, 9, 1), 100.0, date(2025, 8, 25), ""),
        milestone(
            "Warehouse Refurb",
            date(2025, 12, 19),
            90.0,
            None,
            "Landlord refurb in progress - handover Dec 19th",
        ),
        milestone(
            "Landlord Handover",
            date(2025, 12, 19),
            0.0,
            None,
            "Warehouse becomes operational",
        ),
        milestone(
            "Racking & Setup",
            date(2026, 1, 15),
            0.0,
            None,
            "Internal setup after handover",
        ),
        milestone(
            "Warehouse Fully Operational",
            date(2026, 1, 31),
            0.0,
            None,
            "All systems ready",
        ),
    ];

    Project::new(&settings.location, settings.target_date, milestones, now)
        .paused(settings.paused, &settings.pause_reason)
        .with_notes("Handover from landlord: Dec 19th, 2025")
}

pub fn default_budget() -> Budget {
    let categories = [
        ("Warehouse - Rent Deposit (7 months)", 179743.0),
        ("Warehouse - Q1 Rent", 38516.0),
        ("Warehouse - Service Charge (Year)", 48000.0),
        ("Warehouse - Insurance (Annual)", 4800.0),
        ("Warehouse - Business Rates (Year)", 60000.0),
        ("Warehouse - Legal/Professional", 13117.0),
        ("Warehouse - Racking & Setup", 25000.0),
        ("Showroom - Total Completion", 255000.0),
    ];

    Budget::from_categories(
        categories
            .iter()
            .map(|(category, budgeted)| CategorySpend::new(category, *budgeted, 0.0, *budgeted))
            .collect(),
    )
}

pub fn default_operational() -> Operational {
    let staffing = WorkbookSettings::default().staffing;
    Operational {
        suppliers_confirmed: 4,
        suppliers_total: 6,
        products_in_catalogue: 847.0,
        staff_hired: staffing.staff_hired,
        staff_required: staffing.staff_required,
        website_status: SystemStatus::InDevelopment,
        inventory_system_status: SystemStatus::Planned,
    }
}

pub fn default_financial() -> Financial {
    let revenues = [
        15000.0, 22000.0, 35000.0, 48000.0, 62000.0, 78000.0, 95000.0, 115000.0, 135000.0, 155000.0,
        175000.0, 195000.0,
    ];
    let projections = revenues
        .iter()
        .enumerate()
        .map(|(index, revenue)| MonthlyProjection {
            month: format!("Month {}", index + 1),
            revenue: *revenue,
            is_break_even: index + 1 == 9,
        })
        .collect();

    Financial::from_projections(projections, WorkbookSettings::default().revenue_mix)
}

fn open_risk(
    id: &str,
    name: &str,
    rag: Rag,
    description: &str,
    mitigation: &str,
    owner: &str,
    is_pending_decision: bool,
) -> Risk {
    Risk {
        id: id.to_string(),
        name: name.to_string(),
        rag,
        description: description.to_string(),
        mitigation: mitigation.to_string(),
        status: RiskStatus::Open,
        owner: owner.to_string(),
        is_blocker: false,
        is_pending_decision,
    }
}

pub fn default_risks() -> Risks {
    Risks::from_items(vec![
        open_risk(
            "R001",
            "Supplier Lead Times",
            Rag::Amber,
            "Chinese New Year may impact initial stock delivery timeline",
            "Planning stock order 6 weeks before CNY. Multiple supplier relationships.",
            "Operations",
            false,
        ),
        open_risk(
            "R002",
            "Warehouse Refurb Delay",
            Rag::Amber,
            "Landlord refurbishment timeline dependent on contractor availability",
            "Weekly progress calls with landlord. Contingency storage identified.",
            "Operations",
            false,
        ),
        open_risk(
            "R003",
            "Import Duties Post-Brexit",
            Rag::Green,
            "Potential changes to UK import regulations",
            "Working with customs broker. Duty calculations built into pricing model.",
            "Finance",
            false,
        ),
        open_risk(
            "R004",
            "Showroom Contractor Selection",
            Rag::Amber,
            "Final contractor decision pending - 3 quotes received",
            "Expediting final meetings. Budget allows for preferred contractor.",
            "Project Lead",
            true,
        ),
        open_risk(
            "R005",
            "Currency Fluctuation",
            Rag::Amber,
            "GBP/CNY exchange rate volatility affects stock costs",
            "Building 5% currency buffer into pricing. Considering forward contracts.",
            "Finance",
            false,
        ),
        open_risk(
            "R006",
            "Staff Recruitment",
            Rag::Green,
            "Need to hire showroom manager and warehouse staff",
            "Recruitment to begin Q1 2025. Job specs prepared.",
            "HR",
            false,
        ),
    ])
}

pub fn default_cash_flow(opening_balance: f64, burn_rate: f64) -> CashFlow {
    let business_rates = || OutgoingItem::new("Business Rates", 5000.0, 0.0, false);
    let quarter = |rent: &str, service: &str| {
        vec![
            business_rates(),
            OutgoingItem::new(rent, 32097.0, 6419.4, true),
            OutgoingItem::new(service, 12000.0, 0.0, false),
        ]
    };

    let months = vec![
        (
            "Dec 2025".to_string(),
            vec![
                OutgoingItem::new("Legal/Professional Fees", 10930.5, 2186.1, true),
                OutgoingItem::new("Rent Deposit (7 months)", 128388.0, 25677.6, true),
                OutgoingItem::new("Q1 Rent", 32097.0, 6419.4, true),
                OutgoingItem::new("Service Charge (Q1)", 12000.0, 0.0, false),
                OutgoingItem::new("Insurance (Annual)", 4800.0, 0.0, false),
                business_rates(),
            ],
        ),
        ("Jan 2026".to_string(), vec![business_rates()]),
        ("Feb 2026".to_string(), vec![business_rates()]),
        ("Mar 2026".to_string(), quarter("Q2 Rent", "Service Charge (Q2)")),
        ("Apr 2026".to_string(), vec![business_rates()]),
        ("May 2026".to_string(), vec![business_rates()]),
        ("Jun 2026".to_string(), quarter("Q3 Rent", "Service Charge (Q3)")),
    ];

    CashFlow::running_from(opening_balance, months, burn_rate)
}

pub fn default_snapshot_at(now: NaiveDateTime) -> Snapshot {
    let capital = default_capital();
    let cash_flow = default_cash_flow(capital.remaining, capital.burn_rate);
    Snapshot {
        showroom: default_showroom(now),
        warehouse: default_warehouse(now),
        budget: default_budget(),
        operational: default_operational(),
        financial: default_financial(),
        risks: default_risks(),
        cash_flow,
        capital,
        last_updated: local_timestamp(now),
    }
}

/// The complete fallback snapshot shown when no workbook data is usable.
pub fn default_snapshot() -> Snapshot {
    default_snapshot_at(Local::now().naive_local())
}

pub(crate) fn local_timestamp(now: NaiveDateTime) -> chrono::DateTime<Local> {
    now.and_local_timezone(Local)
        .earliest()
        .unwrap_or_else(Local::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at_noon;

    #[test]
    fn default_budget_totals_equal_category_sums() {
        let budget = default_budget();
        let budgeted: f64 = budget.by_category.iter().map(|c| c.budgeted).sum();
        assert_eq!(budget.budgeted_total, budgeted);
        assert_eq!(budget.budgeted_total, 624176.0);
        assert_eq!(budget.actual_spend, 0.0);
        assert_eq!(budget.variance_percent, 100.0);
    }

    #[test]
    fn default_capital_runway_matches_its_burn_rate() {
        let capital = default_capital();
        assert_eq!(capital.remaining, 625000.0);
        assert_eq!(capital.runway_months, 36);
    }

    #[test]
    fn default_projects_derive_completion_from_milestones() {
        let now = at_noon(2025, 12, 1);
        let showroom = default_showroom(now);
        let warehouse = default_warehouse(now);

        assert_eq!(showroom.milestones.len(), 7);
        assert!((showroom.completion_percent - 340.0 / 7.0).abs() < 1e-9);
        assert_eq!(warehouse.milestones.len(), 6);
        assert!((warehouse.completion_percent - 290.0 / 6.0).abs() < 1e-9);
        assert_eq!(warehouse.days_remaining, 61);
        assert!(!showroom.is_paused);
    }

    #[test]
    fn default_financial_sums_its_projections() {
        let financial = default_financial();
        assert_eq!(financial.year1_target, 1130000.0);
        assert_eq!(financial.month1_target, 15000.0);
        assert_eq!(financial.break_even_month, "Month 9");
    }

    #[test]
    fn default_risk_counts_match_open_items() {
        let risks = default_risks();
        assert_eq!(risks.red, 0);
        assert_eq!(risks.amber, 4);
        assert_eq!(risks.green, 2);
        assert_eq!(risks.active_blockers, 0);
        assert_eq!(risks.pending_decisions, 1);
        assert_eq!(risks.items.len(), 6);
    }

    #[test]
    fn default_cash_flow_balances_are_self_consistent() {
        let cash_flow = default_cash_flow(625000.0, 17000.0);
        let mut balance = 625000.0;
        for month in &cash_flow.projections {
            let gross: f64 = month.details.iter().map(|d| d.gross).sum();
            assert!((month.gross_total - gross).abs() < 1e-6);
            assert!((month.gross_total - (month.net_total + month.vat_total)).abs() < 1e-6);
            balance -= gross;
            assert!((month.closing_balance - balance).abs() < 1e-6);
        }
        assert_eq!(cash_flow.projections.len(), 7);
    }

    #[test]
    fn default_snapshot_is_stamped_with_the_given_time() {
        let now = at_noon(2026, 1, 1);
        let snapshot = default_snapshot_at(now);
        assert_eq!(snapshot.last_updated.naive_local(), now);
        assert_eq!(snapshot.cash_flow.burn_rate, snapshot.capital.burn_rate);
    }
}

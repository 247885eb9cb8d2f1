use crate::domain::cell::SheetRow;
use crate::domain::operational::Operational;
use crate::services::coercion::{coerce_number, coerce_text};
use crate::services::settings::StaffingSettings;

const SUPPLIER: &[&str] = &["Supplier", "Name"];
const STATUS: &[&str] = &["Status"];
const PRODUCT_COUNT: &[&str] = &["Product Count", "Products"];

fn is_confirmed(status: &str) -> bool {
    let status = status.to_lowercase();
    status == "confirmed" || status == "yes"
}

/// Summarises the supplier sheet; staffing and system status come from
/// the settings.
pub fn extract_operational(suppliers: &[SheetRow], staffing: &StaffingSettings) -> Operational {
    let suppliers: Vec<&SheetRow> = suppliers
        .iter()
        .filter(|row| !coerce_text(row.cell(SUPPLIER)).is_empty() || !row.cell(STATUS).is_empty())
        .collect();

    let suppliers_confirmed = suppliers
        .iter()
        .filter(|row| is_confirmed(&coerce_text(row.cell(STATUS))))
        .count() as u32;
    let products_in_catalogue = suppliers
        .iter()
        .map(|row| coerce_number(row.cell(PRODUCT_COUNT)))
        .sum();

    Operational {
        suppliers_confirmed,
        suppliers_total: suppliers.len() as u32,
        products_in_catalogue,
        staff_hired: staffing.staff_hired,
        staff_required: staffing.staff_required,
        website_status: staffing.website_status,
        inventory_system_status: staffing.inventory_system_status,
    }
}

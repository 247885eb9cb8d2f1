//! Turns an investor dashboard workbook into a typed snapshot of capital,
//! project progress, budget, operations, financial outlook, risks and cash
//! flow. Missing sheets and unreadable workbooks fall back to default data.

pub mod domain;
pub mod services;

#[cfg(test)]
mod test_support;

pub use domain::snapshot::{ParseOutcome, Snapshot, SnapshotSource};
pub use services::default_data::default_snapshot;
pub use services::workbook_parser::{parse, parse_workbook_bytes};

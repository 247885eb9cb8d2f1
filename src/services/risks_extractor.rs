use crate::domain::cell::SheetRow;
use crate::domain::risk::{Rag, Risk, RiskStatus, Risks};
use crate::services::coercion::{coerce_boolean, coerce_text};

const RISK_ID: &[&str] = &["Risk ID", "ID"];
const RISK_NAME: &[&str] = &["Risk Name", "Name", "Risk"];
const RAG: &[&str] = &["RAG", "RAG Status", "Severity"];
const DESCRIPTION: &[&str] = &["Description"];
const MITIGATION: &[&str] = &["Mitigation"];
const STATUS: &[&str] = &["Status"];
const OWNER: &[&str] = &["Owner"];
const IS_BLOCKER: &[&str] = &["Is Blocker", "Blocker"];
const PENDING_DECISION: &[&str] = &["Pending Decision", "Is Pending Decision", "Decision Pending"];

/// Empty or unrecognized severities are treated as Amber.
fn parse_rag(text: &str) -> Rag {
    Rag::parse(text).unwrap_or(Rag::Amber)
}

/// A blank status means the risk is still open.
fn parse_status(text: &str) -> RiskStatus {
    if text.is_empty() || text.eq_ignore_ascii_case("open") {
        RiskStatus::Open
    } else {
        RiskStatus::Closed
    }
}

pub fn extract_risks(rows: &[SheetRow]) -> Risks {
    let items = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let id = coerce_text(row.cell(RISK_ID));
            Risk {
                id: if id.is_empty() {
                    format!("R{:03}", index + 1)
                } else {
                    id
                },
                name: coerce_text(row.cell(RISK_NAME)),
                rag: parse_rag(&coerce_text(row.cell(RAG))),
                description: coerce_text(row.cell(DESCRIPTION)),
                mitigation: coerce_text(row.cell(MITIGATION)),
                status: parse_status(&coerce_text(row.cell(STATUS))),
                owner: coerce_text(row.cell(OWNER)),
                is_blocker: coerce_boolean(row.cell(IS_BLOCKER)),
                is_pending_decision: coerce_boolean(row.cell(PENDING_DECISION)),
            }
        })
        .collect();

    Risks::from_items(items)
}

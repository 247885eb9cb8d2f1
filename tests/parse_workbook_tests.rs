use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use std::fs;
use std::process::Output;
use tokio::task;

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

use Cell::{Number, Text};

fn add_sheet(workbook: &mut Workbook, name: &str, rows: &[Vec<Cell>]) {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name).unwrap();
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Text(value) => {
                    sheet.write_string(row as u32, col as u16, *value).unwrap();
                }
                Number(value) => {
                    sheet.write_number(row as u32, col as u16, *value).unwrap();
                }
            }
        }
    }
}

fn scenario_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    add_sheet(
        &mut workbook,
        "Capital_Investment",
        &[
            vec![Text("Metric"), Text("Value"), Text("Notes")],
            vec![Text("Total Capital Raised"), Number(625000.0), Text("")],
            vec![Text("Capital Deployed"), Number(0.0), Text("")],
            vec![Text("Monthly Burn Rate"), Number(19239.0), Text("")],
        ],
    );

    let mut showroom = vec![vec![
        Text("Milestone"),
        Text("Target Date"),
        Text("Status %"),
        Text("Complete"),
        Text("Actual Date"),
        Text("Notes"),
    ]];
    for (name, percent) in [
        ("Lease Agreement Signed", 100.0),
        ("Landlord Scope Complete", 100.0),
        ("Contractor Appointed", 100.0),
        ("1st Fix", 0.0),
        ("2nd Fix", 0.0),
        ("Fixtures & Displays", 0.0),
        ("Showroom Launch", 0.0),
    ] {
        let complete = if percent == 100.0 { "Yes" } else { "No" };
        showroom.push(vec![
            Text(name),
            Text("2026-06-01"),
            Number(percent),
            Text(complete),
        ]);
    }
    add_sheet(&mut workbook, "Showroom Progress", &showroom);

    add_sheet(
        &mut workbook,
        "Risks",
        &[
            vec![
                Text("Risk ID"),
                Text("Risk Name"),
                Text("RAG"),
                Text("Description"),
                Text("Mitigation"),
                Text("Status"),
                Text("Owner"),
                Text("Is Blocker"),
                Text("Pending Decision"),
            ],
            vec![
                Text("R001"),
                Text("Supplier Lead Times"),
                Text("Red"),
                Text(""),
                Text(""),
                Text("Open"),
                Text("Operations"),
                Text("Yes"),
                Text("No"),
            ],
            vec![
                Text("R002"),
                Text("Import Duties"),
                Text("Green"),
                Text(""),
                Text(""),
                Text("Closed"),
                Text("Finance"),
                Text("No"),
                Text("No"),
            ],
        ],
    );

    add_sheet(
        &mut workbook,
        "Costs_Tracker",
        &[
            vec![Text("Category"), Text("Budgeted"), Text("Actual"), Text("Forecast"), Text("Notes")],
            vec![Text("Showroom Fit-out"), Number(65000.0), Number(22000.0), Number(62000.0)],
            vec![Text("Warehouse Setup"), Number(40000.0), Number(8000.0), Number(38000.0)],
            vec![Text("Total"), Number(105000.0), Number(30000.0), Number(100000.0)],
        ],
    );

    workbook.save_to_buffer().unwrap()
}

async fn run_parse(input: String, output: String, extra: Vec<String>) -> Output {
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("dashsheet");
        cmd.args(["parse", "-i", &input, "-o", &output]);
        cmd.args(&extra);
        cmd.output().unwrap()
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn parse_writes_snapshot_from_workbook_sheets() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("Investor_Dashboard.xlsx");
    input.write_binary(&scenario_workbook()).unwrap();
    let output = temp.child("snapshot.json");

    run_parse(
        input.path().to_str().unwrap().to_string(),
        output.path().to_str().unwrap().to_string(),
        vec![],
    )
    .await
    .assert()
    .success()
    .stdout(predicate::str::contains("Snapshot written to"));

    let json: Value = serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "excel");

    let data = &json["data"];
    assert_eq!(data["capital"]["remaining"], 625000.0);
    assert_eq!(data["capital"]["runwayMonths"], 32);

    let completion = data["showroom"]["completionPercent"].as_f64().unwrap();
    assert!((completion - 42.857).abs() < 0.001);
    assert_eq!(data["showroom"]["milestones"].as_array().unwrap().len(), 7);

    assert_eq!(data["risks"]["red"], 1);
    assert_eq!(data["risks"]["green"], 0);
    assert_eq!(data["risks"]["activeBlockers"], 1);
    assert_eq!(data["risks"]["items"].as_array().unwrap().len(), 2);

    let categories = data["budget"]["byCategory"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(data["budget"]["budgetedTotal"], 105000.0);
    assert_eq!(data["budget"]["variance"], 75000.0);
}

#[tokio::test]
async fn parse_fills_missing_sheets_with_default_data() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("Investor_Dashboard.xlsx");
    input.write_binary(&scenario_workbook()).unwrap();
    let output = temp.child("snapshot.json");

    run_parse(
        input.path().to_str().unwrap().to_string(),
        output.path().to_str().unwrap().to_string(),
        vec![],
    )
    .await
    .assert()
    .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
    let data = &json["data"];
    assert_eq!(data["operational"]["suppliersTotal"], 6);
    assert_eq!(data["operational"]["suppliersConfirmed"], 4);
    assert_eq!(data["financial"]["breakEvenMonth"], "Month 9");
    assert_eq!(data["financial"]["year1Target"], 1130000.0);
    assert_eq!(data["warehouse"]["location"], "UK Warehouse");
    assert_eq!(data["warehouse"]["milestones"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn parse_writes_yaml_when_asked() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("dashboard.xlsx");
    input.write_binary(&scenario_workbook()).unwrap();
    let output = temp.child("snapshot.yaml");

    run_parse(
        input.path().to_str().unwrap().to_string(),
        output.path().to_str().unwrap().to_string(),
        vec!["-f".to_string(), "yaml".to_string()],
    )
    .await
    .assert()
    .success();

    let yaml = fs::read_to_string(output.path()).unwrap();
    assert!(yaml.contains("source: excel"));
    assert!(yaml.contains("runwayMonths: 32"));
}

#[tokio::test]
async fn parse_rejects_files_that_are_not_excel() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("figures.csv");
    input.write_str("Metric,Value\n").unwrap();
    let output = temp.child("snapshot.json");

    run_parse(
        input.path().to_str().unwrap().to_string(),
        output.path().to_str().unwrap().to_string(),
        vec![],
    )
    .await
    .assert()
    .failure()
    .stderr(predicate::str::contains("Please upload an Excel file (.xlsx or .xls)"));

    output.assert(predicate::path::missing());
}

#[tokio::test]
async fn parse_rejects_workbooks_over_the_size_limit() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("Investor_Dashboard.xlsx");
    input.write_binary(&scenario_workbook()).unwrap();
    let config = temp.child("dashboard.yaml");
    config.write_str("max_upload_bytes: 16\n").unwrap();
    let output = temp.child("snapshot.json");

    run_parse(
        input.path().to_str().unwrap().to_string(),
        output.path().to_str().unwrap().to_string(),
        vec!["-c".to_string(), config.path().to_str().unwrap().to_string()],
    )
    .await
    .assert()
    .failure()
    .stderr(predicate::str::contains("File size must be less than 16 bytes"));

    output.assert(predicate::path::missing());
}

#[tokio::test]
async fn parse_falls_back_to_demo_data_for_a_corrupt_workbook() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("Investor_Dashboard.xlsx");
    input.write_binary(b"not really a spreadsheet").unwrap();
    let output = temp.child("snapshot.json");

    run_parse(
        input.path().to_str().unwrap().to_string(),
        output.path().to_str().unwrap().to_string(),
        vec![],
    )
    .await
    .assert()
    .success()
    .stdout(predicate::str::contains("Error reading workbook, using demo data"));

    let json: Value = serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(json["source"], "default");
    assert_eq!(json["data"]["capital"]["totalRaised"], 625000.0);
}

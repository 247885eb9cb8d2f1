pub mod budget_extractor;
pub mod capital_extractor;
pub mod cash_flow_extractor;
pub mod coercion;
pub mod dashboard_config;
pub mod default_data;
pub mod financial_extractor;
pub mod key_value_sheet;
pub mod operational_extractor;
pub mod project_extractor;
pub mod risks_extractor;
pub mod settings;
pub mod sheet_locator;
pub mod snapshot_loader;
pub mod snapshot_output;
pub mod template_writer;
pub mod upload_policy;
pub mod workbook_parser;
pub mod workbook_reader;

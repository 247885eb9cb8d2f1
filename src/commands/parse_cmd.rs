use std::path::Path;
use std::process::ExitCode;

use dashsheet::services::dashboard_config::DashboardConfig;
use dashsheet::services::upload_policy::validate_upload;
use dashsheet::services::workbook_parser::parse;

use crate::commands::base_commands::Commands;
use crate::commands::output_file::write_output_file;

pub async fn parse_command(cmd: Commands) -> ExitCode {
    let Commands::Parse {
        input,
        output,
        format,
        config,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let config = match DashboardConfig::load(config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let size = match tokio::fs::metadata(&input).await {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            eprintln!("Failed to read workbook {input}: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = validate_upload(&input, size, config.max_upload_bytes) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let bytes = match tokio::fs::read(&input).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read workbook {input}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = parse(&bytes);
    if let Err(e) = write_output_file(&output, &outcome, format).await {
        eprintln!("Failed to write snapshot: {e}");
        return ExitCode::FAILURE;
    }
    if let Some(message) = &outcome.message {
        println!("{message}");
    }
    println!("Snapshot written to {output}");
    ExitCode::SUCCESS
}

use std::path::Path;
use std::process::ExitCode;

use chrono::Local;
use dashsheet::services::dashboard_config::DashboardConfig;
use dashsheet::services::snapshot_loader::load_snapshot;

use crate::commands::base_commands::Commands;
use crate::commands::output_file::write_output_file;

pub async fn load_command(cmd: Commands) -> ExitCode {
    let Commands::Load {
        config,
        output,
        format,
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

    let outcome = load_snapshot(&config.workbook_path, Local::now().naive_local()).await;
    let format = format.unwrap_or(config.output_format);
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

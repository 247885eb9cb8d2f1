use std::process::ExitCode;

use dashsheet::services::default_data::default_snapshot;
use dashsheet::services::template_writer::write_template;

use crate::commands::base_commands::Commands;

pub async fn template_command(cmd: Commands) -> ExitCode {
    let Commands::Template { output } = cmd else {
        return ExitCode::FAILURE;
    };

    let bytes = match write_template(&default_snapshot()) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to build template: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = tokio::fs::write(&output, bytes).await {
        eprintln!("Failed to write template: {e}");
        return ExitCode::FAILURE;
    }
    println!("Template workbook written to {output}");
    ExitCode::SUCCESS
}

use std::process::ExitCode;

use dashsheet::services::default_data::default_snapshot;

use crate::commands::base_commands::Commands;
use crate::commands::output_file::write_output_file;

pub async fn defaults_command(cmd: Commands) -> ExitCode {
    let Commands::Defaults { output, format } = cmd else {
        return ExitCode::FAILURE;
    };

    if let Err(e) = write_output_file(&output, &default_snapshot(), format).await {
        eprintln!("Failed to write default snapshot: {e}");
        return ExitCode::FAILURE;
    }
    println!("Default snapshot written to {output}");
    ExitCode::SUCCESS
}

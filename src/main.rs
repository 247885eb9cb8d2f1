mod commands;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::defaults_cmd::defaults_command;
use crate::commands::load_cmd::load_command;
use crate::commands::parse_cmd::parse_command;
use crate::commands::template_cmd::template_command;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Parse { .. } => parse_command(cmd).await,
        cmd @ Commands::Load { .. } => load_command(cmd).await,
        cmd @ Commands::Defaults { .. } => defaults_command(cmd).await,
        cmd @ Commands::Template { .. } => template_command(cmd).await,
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dashsheet::services::snapshot_output::OutputFormat;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an uploaded workbook into a dashboard snapshot
    Parse {
        /// Workbook file (.xlsx or .xls)
        #[arg(short, long)]
        input: String,
        /// Output file for the snapshot
        #[arg(short, long)]
        output: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Optional dashboard config YAML
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Load the dashboard from the configured workbook path
    Load {
        /// Optional dashboard config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Output file for the snapshot
        #[arg(short, long)]
        output: String,
        /// Output format, overriding the config
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Write the default dashboard snapshot
    Defaults {
        /// Output file for the snapshot
        #[arg(short, long)]
        output: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Write a workbook template filled with the default data
    Template {
        /// Output .xlsx file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_json_output() {
        let args = CliArgs::parse_from([
            "dashsheet",
            "parse",
            "-i",
            "Investor_Dashboard.xlsx",
            "-o",
            "snapshot.json",
        ]);

        if let Commands::Parse { format, config, .. } = args.command {
            assert_eq!(format, OutputFormat::Json);
            assert!(config.is_none());
        } else {
            panic!("expected parse command");
        }
    }

    #[test]
    fn load_leaves_format_to_the_config_unless_given() {
        let args = CliArgs::parse_from(["dashsheet", "load", "-o", "snapshot.yaml"]);
        if let Commands::Load { format, .. } = args.command {
            assert!(format.is_none());
        } else {
            panic!("expected load command");
        }

        let args = CliArgs::parse_from(["dashsheet", "load", "-o", "snapshot.yaml", "-f", "yaml"]);
        if let Commands::Load { format, .. } = args.command {
            assert_eq!(format, Some(OutputFormat::Yaml));
        } else {
            panic!("expected load command");
        }
    }
}

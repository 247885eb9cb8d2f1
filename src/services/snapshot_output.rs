use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize output as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize output as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Writes any serializable record, such as a parse outcome or a bare
/// snapshot, in the requested format.
pub fn write_output<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, value)?;
            writer.write_all(b"\n")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value)?;
            writer.write_all(yaml.as_bytes())?;
        }
    }
    Ok(())
}

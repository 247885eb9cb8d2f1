use serde::Serialize;

use dashsheet::services::snapshot_output::{OutputError, OutputFormat, write_output};

pub async fn write_output_file<T: Serialize>(
    path: &str,
    value: &T,
    format: OutputFormat,
) -> Result<(), OutputError> {
    let mut buffer = Vec::new();
    write_output(&mut buffer, value, format)?;
    tokio::fs::write(path, buffer).await?;
    Ok(())
}

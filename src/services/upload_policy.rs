use std::path::Path;

use thiserror::Error;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const ACCEPTED_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// Reasons an upload is turned away before any parsing is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please upload an Excel file (.xlsx or .xls)")]
    NotExcel,
    #[error("File size must be less than {}", size_limit_text(.max_bytes))]
    TooLarge { size: u64, max_bytes: u64 },
}

const BYTES_PER_MB: u64 = 1024 * 1024;

fn size_limit_text(max_bytes: &u64) -> String {
    if *max_bytes >= BYTES_PER_MB && max_bytes % BYTES_PER_MB == 0 {
        format!("{}MB", max_bytes / BYTES_PER_MB)
    } else {
        format!("{max_bytes} bytes")
    }
}

pub fn validate_upload(file_name: &str, size: u64, max_bytes: u64) -> Result<(), UploadError> {
    let is_excel = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.iter().any(|accepted| ext.eq_ignore_ascii_case(accepted)));
    if !is_excel {
        return Err(UploadError::NotExcel);
    }
    if size > max_bytes {
        return Err(UploadError::TooLarge { size, max_bytes });
    }
    Ok(())
}

use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime};
use log::{info, warn};

use crate::domain::snapshot::ParseOutcome;
use crate::services::default_data::default_snapshot_at;
use crate::services::workbook_parser::{UNREADABLE_WORKBOOK_MESSAGE, parse_workbook_bytes_at};

pub fn missing_workbook_message(path: &Path) -> String {
    format!("Using default data. Place your workbook at {}", path.display())
}

/// Loads the dashboard from the workbook at a well-known path. A missing or
/// unreadable workbook yields the default snapshot and an advisory message.
pub async fn load_snapshot(path: &Path, now: NaiveDateTime) -> ParseOutcome {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("no workbook at {}, using default data", path.display());
            return ParseOutcome::from_default(default_snapshot_at(now), &missing_workbook_message(path));
        }
        Err(err) => {
            warn!("cannot inspect workbook {}: {}", path.display(), err);
            return ParseOutcome::from_default(default_snapshot_at(now), UNREADABLE_WORKBOOK_MESSAGE);
        }
    };

    let parsed = match tokio::fs::read(path).await {
        Ok(bytes) => parse_workbook_bytes_at(&bytes, now).map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };

    match parsed {
        Ok(snapshot) => {
            info!("loaded dashboard data from {}", path.display());
            ParseOutcome {
                last_modified: metadata.modified().ok().map(DateTime::<Local>::from),
                ..ParseOutcome::from_excel(snapshot)
            }
        }
        Err(err) => {
            warn!("error reading workbook {}: {}", path.display(), err);
            ParseOutcome::from_default(default_snapshot_at(now), UNREADABLE_WORKBOOK_MESSAGE)
        }
    }
}

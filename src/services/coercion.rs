use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

use crate::domain::cell::CellValue;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Converts a 1900-system spreadsheet date serial into a date-time.
///
/// Serial 60 is the non-existent 1900-02-29 and rolls over to 1900-03-01;
/// serials from 61 on are shifted back one day to account for it.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let days = serial.floor();
    let millis = ((serial - days) * MILLIS_PER_DAY).round() as i64;
    let days = days as i64;

    let date = if days >= 61 {
        NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_signed(Duration::try_days(days)?)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 31)?.checked_add_signed(Duration::try_days(days)?)?
    };
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::milliseconds(millis))
}

pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_local());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn coerce_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Date(date) => Some(date.date()),
        CellValue::Number(serial) if *serial > 0.0 => {
            excel_serial_to_datetime(*serial).map(|dt| dt.date())
        }
        CellValue::Text(text) => parse_date_text(text).map(|dt| dt.date()),
        _ => None,
    }
}

pub fn coerce_boolean(value: &CellValue) -> bool {
    match value {
        CellValue::Bool(flag) => *flag,
        CellValue::Text(text) => {
            matches!(text.trim().to_lowercase().as_str(), "yes" | "true" | "1")
        }
        CellValue::Number(number) => *number == 1.0,
        _ => false,
    }
}

/// Numeric reading of a cell; anything unparseable counts as zero.
pub fn coerce_number(value: &CellValue) -> f64 {
    parse_number(value).unwrap_or(0.0)
}

pub fn parse_number(value: &CellValue) -> Option<f64> {
    let number = match value {
        CellValue::Number(number) => *number,
        CellValue::Text(text) => {
            let cleaned: String = text
                .trim()
                .chars()
                .filter(|c| !matches!(c, ',' | '£' | '$' | '€' | '%') && !c.is_whitespace())
                .collect();
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

pub fn coerce_text(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Text(text) => text.trim().to_string(),
        CellValue::Number(number) if number.fract() == 0.0 && number.abs() < 1e15 => {
            format!("{}", *number as i64)
        }
        CellValue::Number(number) => number.to_string(),
        CellValue::Bool(flag) => flag.to_string(),
        CellValue::Date(date) => date.date().format("%Y-%m-%d").to_string(),
    }
}

/// Whole days from `now` until the start of `target`, never negative.
pub fn days_remaining(target: Option<NaiveDate>, now: NaiveDateTime) -> i64 {
    let Some(target) = target else {
        return 0;
    };
    let Some(target_start) = target.and_hms_opt(0, 0, 0) else {
        return 0;
    };
    let millis = (target_start - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil().max(0.0) as i64
}

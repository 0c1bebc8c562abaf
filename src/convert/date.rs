//! Date resolver: UNTDID 2379 format "102" strings and chrono dates.

use chrono::NaiveDate;

use crate::cii::{DateTime, DateTimeString, FormattedDateTime};
use crate::core::{ConversionError, DateError};

/// UNTDID 2379 format code for `YYYYMMDD`.
pub const DATE_FORMAT_102: &str = "102";

/// Parse a date string tagged with a format code; an absent format means "102".
pub fn parse_date(value: &str, format: Option<&str>) -> Result<NaiveDate, DateError> {
    let format = format.map(str::trim).unwrap_or(DATE_FORMAT_102);
    if format != DATE_FORMAT_102 {
        return Err(DateError::UnsupportedFormat(format.to_string()));
    }
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::Malformed(value.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| DateError::OutOfRange(value.to_string()))
}

/// Format a date as a zero-padded format-102 string.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Resolve a `udt:DateTimeString`, attaching `field` to any error.
pub fn resolve(dts: &DateTimeString, field: &str) -> Result<NaiveDate, ConversionError> {
    parse_date(&dts.value, dts.format.as_deref()).map_err(|source| ConversionError::Date {
        field: field.to_string(),
        source,
    })
}

pub fn new_date_time_string(date: NaiveDate) -> DateTimeString {
    DateTimeString {
        format: Some(DATE_FORMAT_102.to_string()),
        value: format_date(date),
    }
}

pub fn new_date_time(date: NaiveDate) -> DateTime {
    DateTime {
        date_time_string: new_date_time_string(date),
    }
}

pub fn new_formatted_date_time(date: NaiveDate) -> FormattedDateTime {
    FormattedDateTime {
        date_time_string: new_date_time_string(date),
    }
}

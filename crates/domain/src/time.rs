//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::ValidationError;

/// UTC timestamp attached to every reading.
pub type Timestamp = DateTime<Utc>;

/// Wire format accepted for client-supplied reading dates.
pub const READING_DATE_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a `MM-DD-YYYY HH:MM:SS` string. The value carries no offset and is
/// read as UTC, the same zone used for defaulted timestamps.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `value` does not match
/// [`READING_DATE_FORMAT`].
pub fn parse_reading_date(value: &str) -> Result<Timestamp, ValidationError> {
    NaiveDateTime::parse_from_str(value, READING_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ValidationError::InvalidDate {
            value: value.to_string(),
            source,
        })
}

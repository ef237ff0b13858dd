//! Date formatter: derive a human-readable release date per row.

use crate::error::{DateError, DateResult};
use crate::models::SongRecord;
use chrono::NaiveDate;

/// Format a row's release date as e.g. `"Mon, January 01, 2024"`.
///
/// Fails when year/month/day do not form a real calendar date. The caller
/// decides what to do with the row; the error itself is non-fatal.
pub fn format_release_date(row: &SongRecord) -> DateResult<String> {
    let date = NaiveDate::from_ymd_opt(row.released_year, row.released_month, row.released_day)
        .ok_or(DateError::InvalidDate {
            year: row.released_year,
            month: row.released_month,
            day: row.released_day,
        })?;

    Ok(date.format("%a, %B %d, %Y").to_string())
}

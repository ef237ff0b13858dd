//! Filter stage: narrow the table by artist substring or release year.

use crate::error::{FilterError, FilterResult};
use crate::models::{FilterKind, Table};

/// Apply the optional row filter, preserving original row order.
///
/// - [`FilterKind::Artist`]: keep rows whose artist name contains `value`
///   as a case-insensitive substring. Rows with an empty artist name never
///   match.
/// - [`FilterKind::Year`]: keep rows whose `released_year` equals `value`
///   parsed as an integer. A non-integer value is fatal.
/// - `None`: the table passes through unchanged.
pub fn apply_filter(
    table: Table,
    filter: Option<FilterKind>,
    value: &str,
) -> FilterResult<Table> {
    match filter {
        Some(FilterKind::Artist) => {
            let needle = value.to_lowercase();
            Ok(table
                .into_iter()
                .filter(|row| {
                    !row.artist_name.is_empty()
                        && row.artist_name.to_lowercase().contains(&needle)
                })
                .collect())
        }
        Some(FilterKind::Year) => {
            let year: i32 = value.trim().parse().map_err(|_| FilterError::InvalidValue {
                value: value.to_string(),
                message: "expected an integer year".to_string(),
            })?;
            Ok(table
                .into_iter()
                .filter(|row| row.released_year == year)
                .collect())
        }
        None => Ok(table),
    }
}

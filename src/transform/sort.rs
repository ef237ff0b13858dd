//! Sort/limit stage: order rows by the resolved metric and truncate.

use crate::models::{OrderBy, Table};

/// Sort the table by the metric column and keep at most `limit` rows.
///
/// The sort is stable: rows with equal metric values keep their original
/// relative order, in both directions. A `limit` larger than the table
/// keeps every row.
pub fn sort_and_limit(
    mut table: Table,
    order_by: OrderBy,
    ascending: bool,
    limit: Option<usize>,
) -> Table {
    if ascending {
        table.sort_by(|a, b| order_by.metric(a).cmp(&order_by.metric(b)));
    } else {
        table.sort_by(|a, b| order_by.metric(b).cmp(&order_by.metric(a)));
    }

    if let Some(limit) = limit {
        table.truncate(limit);
    }
    table
}

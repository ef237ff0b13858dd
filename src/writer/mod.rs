//! Writer: serialize the final table to a CSV file.

use crate::error::WriteResult;
use crate::transform::project::Projection;
use std::path::Path;

/// Write the projection as CSV: header row, then one line per row,
/// no index column.
pub fn write_csv<P: AsRef<Path>>(projection: &Projection, path: P) -> WriteResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    writer.write_record(projection.columns())?;
    for row in &projection.rows {
        let metric = row.metric.to_string();
        writer.write_record([
            row.released.as_str(),
            row.track_name.as_str(),
            row.artist_name.as_str(),
            metric.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

//! Column projector: derive the release date and select the output columns.

use crate::models::{OrderBy, Table};
use crate::transform::dates::format_release_date;
use log::warn;

/// One row of the final output table.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub released: String,
    pub track_name: String,
    pub artist_name: String,
    pub metric: u64,
}

/// The final output table: four columns, the last one named after the
/// selected metric.
#[derive(Debug, Clone)]
pub struct Projection {
    pub order_by: OrderBy,
    pub rows: Vec<OutputRow>,
    /// Rows excluded because their release date was not a real calendar date.
    pub dropped: usize,
}

impl Projection {
    /// Output column names, in order.
    pub fn columns(&self) -> [&'static str; 4] {
        [
            "released",
            "track_name",
            "artist(s)_name",
            self.order_by.column(),
        ]
    }
}

/// Project the table onto the output columns.
///
/// Each row gets a formatted `released` date; rows whose date is invalid are
/// logged and excluded rather than failing the run.
pub fn project(table: &Table, order_by: OrderBy) -> Projection {
    let mut rows = Vec::with_capacity(table.len());
    let mut dropped = 0;

    for record in table {
        match format_release_date(record) {
            Ok(released) => rows.push(OutputRow {
                released,
                track_name: record.track_name.clone(),
                artist_name: record.artist_name.clone(),
                metric: order_by.metric(record),
            }),
            Err(e) => {
                dropped += 1;
                warn!("Dropping '{}' by {}: {}", record.track_name, record.artist_name, e);
            }
        }
    }

    Projection {
        order_by,
        rows,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SongRecord;

    fn row(track: &str, month: u32, day: u32, streams: u64) -> SongRecord {
        SongRecord {
            track_name: track.into(),
            artist_name: "Artist".into(),
            released_year: 2023,
            released_month: month,
            released_day: day,
            streams,
            in_spotify_playlists: 7,
            in_apple_playlists: 9,
        }
    }

    #[test]
    fn test_project_streams_columns() {
        let table = vec![row("a", 1, 12, 42)];
        let projection = project(&table, OrderBy::Streams);

        assert_eq!(
            projection.columns(),
            ["released", "track_name", "artist(s)_name", "streams"]
        );
        assert_eq!(projection.rows.len(), 1);
        assert_eq!(projection.rows[0].metric, 42);
        assert_eq!(projection.rows[0].released, "Thu, January 12, 2023");
    }

    #[test]
    fn test_project_metric_column_follows_order_by() {
        let table = vec![row("a", 1, 12, 42)];

        let spotify = project(&table, OrderBy::NoSpotifyPlaylists);
        assert_eq!(spotify.columns()[3], "in_spotify_playlists");
        assert_eq!(spotify.rows[0].metric, 7);

        let apple = project(&table, OrderBy::NoApplePlaylists);
        assert_eq!(apple.columns()[3], "in_apple_playlists");
        assert_eq!(apple.rows[0].metric, 9);
    }

    #[test]
    fn test_invalid_date_row_dropped_not_fatal() {
        let table = vec![row("good", 1, 12, 1), row("bad", 2, 30, 2), row("ok", 3, 1, 3)];
        let projection = project(&table, OrderBy::Streams);

        assert_eq!(projection.rows.len(), 2);
        assert_eq!(projection.dropped, 1);
        let tracks: Vec<_> = projection.rows.iter().map(|r| r.track_name.as_str()).collect();
        assert_eq!(tracks, vec!["good", "ok"]);
    }
}

//! Pipeline driver: wire load, filter, sort/limit, project and write.
//!
//! # Example
//!
//! ```rust,ignore
//! use songsift::models::{OrderBy, Parameters, SortOrder};
//! use songsift::transform::pipeline;
//!
//! let params = Parameters {
//!     data_file: "songs.csv".into(),
//!     filter: None,
//!     value: None,
//!     order_by: OrderBy::Streams,
//!     order: SortOrder::Asc,
//!     limit: Some(6),
//! };
//! let summary = pipeline::run(&params)?;
//! println!("{} rows written to {}", summary.written, summary.output.display());
//! ```

use crate::error::PipelineResult;
use crate::models::Parameters;
use crate::parser::load_dataset;
use crate::transform::filter::apply_filter;
use crate::transform::project::project;
use crate::transform::sort::sort_and_limit;
use crate::writer::write_csv;
use log::info;
use std::path::{Path, PathBuf};

/// Default destination of the final table.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Counters describing one completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Rows parsed from the input file.
    pub loaded: usize,
    /// Rows remaining after the filter stage.
    pub filtered: usize,
    /// Rows excluded for an invalid release date.
    pub dropped_dates: usize,
    /// Rows written to the output file.
    pub written: usize,
    /// Where the output landed.
    pub output: PathBuf,
    /// Detected input encoding.
    pub encoding: String,
}

/// Run the whole pipeline, writing to [`DEFAULT_OUTPUT`].
pub fn run(params: &Parameters) -> PipelineResult<RunSummary> {
    run_to(params, Path::new(DEFAULT_OUTPUT))
}

/// Run the whole pipeline, writing to `output`.
///
/// Stages execute strictly in sequence over the whole table; any fatal
/// stage error aborts the run.
pub fn run_to(params: &Parameters, output: &Path) -> PipelineResult<RunSummary> {
    let loaded = load_dataset(&params.data_file)?;
    info!(
        "Loaded {} rows from {} ({} encoded)",
        loaded.table.len(),
        params.data_file.display(),
        loaded.encoding
    );
    let row_count = loaded.table.len();
    let encoding = loaded.encoding;

    let value = params.value.as_deref().unwrap_or("");
    let table = apply_filter(loaded.table, params.filter, value)?;
    let filtered = table.len();
    info!("{} rows after filter", filtered);

    let table = sort_and_limit(
        table,
        params.order_by,
        params.order.is_ascending(),
        params.limit,
    );

    let projection = project(&table, params.order_by);
    if projection.dropped > 0 {
        info!("{} rows dropped for invalid release dates", projection.dropped);
    }

    write_csv(&projection, output)?;
    info!("{} rows written to {}", projection.rows.len(), output.display());

    Ok(RunSummary {
        loaded: row_count,
        filtered,
        dropped_dates: projection.dropped,
        written: projection.rows.len(),
        output: output.to_path_buf(),
        encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterKind, OrderBy, SortOrder};
    use std::io::Write;
    use tempfile::TempDir;

    const HEADER: &str = "track_name,artist(s)_name,released_year,released_month,released_day,streams,in_spotify_playlists,in_apple_playlists";

    fn write_dataset(dir: &TempDir, rows: &[&str]) -> PathBuf {
        let path = dir.path().join("songs.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    fn params(data_file: PathBuf) -> Parameters {
        Parameters {
            data_file,
            filter: None,
            value: None,
            order_by: OrderBy::Streams,
            order: SortOrder::Asc,
            limit: None,
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_full_run_sort_ascending_with_limit() {
        let dir = TempDir::new().unwrap();
        let data = write_dataset(
            &dir,
            &[
                "g,Artist G,2023,1,1,700,1,1",
                "c,Artist C,2023,1,1,300,1,1",
                "a,Artist A,2023,1,1,100,1,1",
                "e,Artist E,2023,1,1,500,1,1",
                "b,Artist B,2023,1,1,200,1,1",
                "f,Artist F,2023,1,1,600,1,1",
                "d,Artist D,2023,1,1,400,1,1",
            ],
        );
        let output = dir.path().join("output.csv");

        let mut p = params(data);
        p.limit = Some(6);
        let summary = run_to(&p, &output).unwrap();

        assert_eq!(summary.loaded, 7);
        assert_eq!(summary.written, 6);

        let lines = read_lines(&output);
        assert_eq!(lines[0], "released,track_name,artist(s)_name,streams");
        let tracks: Vec<_> = lines[1..]
            .iter()
            .map(|l| l.split(',').nth(3).unwrap().to_string())
            .collect();
        assert_eq!(tracks, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_full_run_artist_filter() {
        let dir = TempDir::new().unwrap();
        let data = write_dataset(
            &dir,
            &[
                "Levitating,Dua Lipa,2020,10,1,1800,1,1",
                "bad guy,Billie Eilish,2019,3,29,1400,1,1",
                "Titanium,DUA LIPA & SIA,2023,5,5,900,1,1",
            ],
        );
        let output = dir.path().join("output.csv");

        let mut p = params(data);
        p.filter = Some(FilterKind::Artist);
        p.value = Some("Dua".into());
        let summary = run_to(&p, &output).unwrap();

        assert_eq!(summary.filtered, 2);
        assert_eq!(summary.written, 2);
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(!content.contains("Billie Eilish"));
    }

    #[test]
    fn test_invalid_date_row_excluded_without_aborting() {
        let dir = TempDir::new().unwrap();
        let data = write_dataset(
            &dir,
            &[
                "valid,Artist,2023,1,12,100,1,1",
                "impossible,Artist,2023,2,30,200,1,1",
            ],
        );
        let output = dir.path().join("output.csv");

        let summary = run_to(&params(data), &output).unwrap();

        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.dropped_dates, 1);
        assert_eq!(summary.written, 1);
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(!content.contains("impossible"));
    }

    #[test]
    fn test_output_never_larger_than_input() {
        let dir = TempDir::new().unwrap();
        let data = write_dataset(
            &dir,
            &[
                "a,X,2023,1,1,1,1,1",
                "b,Y,2023,2,30,2,1,1",
                "c,Z,2022,3,3,3,1,1",
            ],
        );
        let output = dir.path().join("output.csv");

        let mut p = params(data);
        p.filter = Some(FilterKind::Year);
        p.value = Some("2023".into());
        p.limit = Some(10);
        let summary = run_to(&p, &output).unwrap();

        assert!(summary.filtered <= summary.loaded);
        assert!(summary.written <= summary.filtered);
    }

    #[test]
    fn test_invalid_year_value_is_fatal() {
        let dir = TempDir::new().unwrap();
        let data = write_dataset(&dir, &["a,X,2023,1,1,1,1,1"]);
        let output = dir.path().join("output.csv");

        let mut p = params(data);
        p.filter = Some(FilterKind::Year);
        p.value = Some("abc".into());
        assert!(run_to(&p, &output).is_err());
    }

    #[test]
    fn test_output_roundtrips_through_csv_reader() {
        let dir = TempDir::new().unwrap();
        let data = write_dataset(
            &dir,
            &[
                "Flowers,Miley Cyrus,2023,1,12,1316855716,12211,300",
                "Levitating,\"Dua Lipa, DaBaby\",2020,10,1,1800000000,24094,128",
            ],
        );
        let output = dir.path().join("output.csv");

        run_to(&params(data), &output).unwrap();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec![
                "released",
                "track_name",
                "artist(s)_name",
                "streams"
            ])
        );
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        // Ascending by streams: Flowers first.
        assert_eq!(&rows[0][1], "Flowers");
        assert_eq!(&rows[0][0], "Thu, January 12, 2023");
        assert_eq!(&rows[1][2], "Dua Lipa, DaBaby");
    }
}

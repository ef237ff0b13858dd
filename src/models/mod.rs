//! Domain models for the songsift pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`SongRecord`] - one song row from the dataset
//! - [`Table`] - ordered collection of rows
//! - [`FilterKind`] - which optional filter to apply
//! - [`OrderBy`] - which metric column drives sorting and output
//! - [`SortOrder`] - ascending or descending
//! - [`Parameters`] - validated run parameters

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Song Record
// =============================================================================

/// One song from the dataset.
///
/// Only the columns the pipeline touches are modeled; any other columns in
/// the input file are ignored by the loader. Field names follow the dataset's
/// headers (the artist column is literally named `artist(s)_name`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongRecord {
    pub track_name: String,

    #[serde(rename = "artist(s)_name")]
    pub artist_name: String,

    pub released_year: i32,
    pub released_month: u32,
    pub released_day: u32,

    pub streams: u64,
    pub in_spotify_playlists: u64,
    pub in_apple_playlists: u64,
}

/// Ordered sequence of rows sharing the dataset's column set.
///
/// Each pipeline stage consumes a `Table` and produces a new one; rows are
/// only ever removed or reordered, never added or duplicated.
pub type Table = Vec<SongRecord>;

// =============================================================================
// Filter Kind
// =============================================================================

/// Which optional row filter to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    /// Keep rows whose artist name contains the value (case-insensitive).
    #[value(name = "ARTIST")]
    Artist,
    /// Keep rows whose release year equals the value.
    #[value(name = "YEAR")]
    Year,
}

impl FilterKind {
    /// Parse a filter kind from its wire code.
    ///
    /// Unrecognized codes mean "no filter": the table passes through
    /// unchanged, so this returns `None` rather than failing.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "ARTIST" => Some(Self::Artist),
            "YEAR" => Some(Self::Year),
            _ => None,
        }
    }
}

// =============================================================================
// Order By (metric column)
// =============================================================================

/// The metric column used both as the sort key and as the single numeric
/// column of the output.
///
/// Resolved exactly once per run; sorting and projection consume the same
/// value, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderBy {
    #[value(name = "STREAMS")]
    Streams,
    #[value(name = "NO_SPOTIFY_PLAYLISTS")]
    NoSpotifyPlaylists,
    #[value(name = "NO_APPLE_PLAYLISTS")]
    NoApplePlaylists,
}

impl OrderBy {
    /// Parse from the wire code, falling back to [`OrderBy::Streams`] for
    /// anything unrecognized.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "NO_SPOTIFY_PLAYLISTS" => Self::NoSpotifyPlaylists,
            "NO_APPLE_PLAYLISTS" => Self::NoApplePlaylists,
            "STREAMS" => Self::Streams,
            _ => Self::Streams,
        }
    }

    /// Concrete dataset column name this metric maps to.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Streams => "streams",
            Self::NoSpotifyPlaylists => "in_spotify_playlists",
            Self::NoApplePlaylists => "in_apple_playlists",
        }
    }

    /// The metric value of a row under this column.
    pub fn metric(&self, row: &SongRecord) -> u64 {
        match self {
            Self::Streams => row.streams,
            Self::NoSpotifyPlaylists => row.in_spotify_playlists,
            Self::NoApplePlaylists => row.in_apple_playlists,
        }
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[value(name = "ASC")]
    Asc,
    #[value(name = "DES")]
    Des,
}

impl SortOrder {
    /// Whether this order sorts ascending. Anything other than `ASC`
    /// sorts descending.
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Parse from the wire code; only `ASC` is ascending.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "ASC" => Self::Asc,
            _ => Self::Des,
        }
    }
}

// =============================================================================
// Run Parameters
// =============================================================================

/// Validated parameters for one pipeline run.
///
/// Produced by the CLI layer; `value` is present whenever `filter` is.
#[derive(Debug, Clone)]
pub struct Parameters {
    /// Path to the input CSV file.
    pub data_file: PathBuf,
    /// Optional row filter.
    pub filter: Option<FilterKind>,
    /// Value for the filter, required iff `filter` is set.
    pub value: Option<String>,
    /// Metric column for sorting and output.
    pub order_by: OrderBy,
    /// Sort direction.
    pub order: SortOrder,
    /// Keep at most this many rows after sorting.
    pub limit: Option<usize>,
}

// =============================================================================
// Tests
// =============================================================================

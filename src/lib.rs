//! # songsift - filter, sort and reformat the Spotify 2023 songs dataset
//!
//! songsift reads a CSV of song records, optionally narrows it by artist or
//! release year, sorts it by a metric column, truncates it, derives a
//! human-readable release date per row and writes the result back out as CSV.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│   Loader   │────▶│  Transform  │────▶│ output.csv  │
//! │ (any enc.)  │     │ (auto-enc) │     │ filter/sort │     │ (4 columns) │
//! └─────────────┘     └────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
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
//!     order: SortOrder::Des,
//!     limit: Some(10),
//! };
//! let summary = pipeline::run(&params)?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (SongRecord, OrderBy, Parameters)
//! - [`parser`] - CSV loading with encoding auto-detection
//! - [`transform`] - Filter, sort, date and projection stages plus the driver
//! - [`writer`] - CSV output

// Core modules
pub mod error;
pub mod models;

// Input
pub mod parser;

// Stages and driver
pub mod transform;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, DateError, FilterError, PipelineError, WriteError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{FilterKind, OrderBy, Parameters, SongRecord, SortOrder, Table};

// =============================================================================
// Re-exports - Loader
// =============================================================================

pub use parser::{detect_delimiter, detect_encoding, load_dataset, LoadResult};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use transform::{apply_filter, format_release_date, project, sort_and_limit, Projection};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{run, run_to, RunSummary, DEFAULT_OUTPUT};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::write_csv;

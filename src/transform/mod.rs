//! Transformation stages.
//!
//! This module holds the table-to-table stages and the driver:
//! - Filter: narrow rows by artist or year
//! - Sort: order by the metric column and truncate
//! - Dates: per-row release date formatting
//! - Project: select the output columns
//! - Pipeline: the end-to-end run

pub mod dates;
pub mod filter;
pub mod pipeline;
pub mod project;
pub mod sort;

pub use dates::format_release_date;
pub use filter::apply_filter;
pub use pipeline::{run, run_to, RunSummary, DEFAULT_OUTPUT};
pub use project::{project, OutputRow, Projection};
pub use sort::sort_and_limit;

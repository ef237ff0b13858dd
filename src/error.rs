//! Error types for the songsift pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - dataset loading errors
//! - [`FilterError`] - filter stage errors
//! - [`DateError`] - per-row release date errors (non-fatal)
//! - [`WriteError`] - output serialization errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. [`DateError`] is the
//! one class handled locally per row and never reaches the top level.

use thiserror::Error;

// =============================================================================
// Dataset Loading Errors
// =============================================================================

/// Errors while loading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode file content.
    #[error("Failed to decode file as {encoding}: {message}")]
    Encoding { encoding: String, message: String },

    /// Malformed CSV row.
    #[error("Malformed CSV at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,
}

// =============================================================================
// Filter Errors
// =============================================================================

/// Errors from the filter stage.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Filter value cannot be interpreted for the selected filter kind.
    #[error("Invalid filter value '{value}': {message}")]
    InvalidValue { value: String, message: String },
}

// =============================================================================
// Date Errors (per-row, non-fatal)
// =============================================================================

/// A row's year/month/day fields do not form a real calendar date.
///
/// Handled locally: the offending row is logged and dropped from the output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

// =============================================================================
// Writer Errors
// =============================================================================

/// Errors while writing the output CSV.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create or write the destination file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("Failed to serialize output: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::transform::pipeline::run`].
/// It wraps all fatal lower-level errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Dataset loading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Filter stage error.
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Output writing error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for dataset loading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for the filter stage.
pub type FilterResult<T> = Result<T, FilterError>;

/// Result type for per-row date formatting.
pub type DateResult<T> = Result<T, DateError>;

/// Result type for output writing.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

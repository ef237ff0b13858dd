//! Dataset loader: CSV file to an in-memory [`Table`] of song records.
//!
//! Handles encoding and delimiter auto-detection so that non-UTF-8 exports
//! of the dataset still load. Rows are deserialized into typed
//! [`SongRecord`]s; columns not modeled there are ignored.

use crate::error::{CsvError, CsvResult};
use crate::models::{SongRecord, Table};
use std::path::Path;

/// Result of loading a dataset, with detection metadata.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Parsed rows, in file order.
    pub table: Table,
    /// Detected encoding.
    pub encoding: String,
    /// Detected delimiter.
    pub delimiter: u8,
}

/// Detect the encoding of raw bytes using chardet, normalized to
/// the labels encoding_rs understands.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the named encoding.
///
/// Decoding is lossy for individually bad byte sequences; only an encoding
/// label encoding_rs does not know at all is an error.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let enc = encoding_rs::Encoding::for_label(encoding.as_bytes()).ok_or_else(|| {
        CsvError::Encoding {
            encoding: encoding.to_string(),
            message: "unknown encoding label".to_string(),
        }
    })?;
    let (decoded, _, _) = enc.decode(bytes);
    Ok(decoded.into_owned())
}

/// Detect the delimiter by counting candidate occurrences in the header line.
pub fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or("");

    let candidates = [b',', b';', b'\t', b'|'];
    let mut best = b',';
    let mut best_count = 0;

    for &sep in &candidates {
        let count = header.matches(sep as char).count();
        if count > best_count {
            best_count = count;
            best = sep;
        }
    }

    best
}

/// Parse decoded CSV content into a [`Table`].
///
/// The first line is the header; every subsequent non-empty line must have a
/// consistent column count and valid numeric fields, otherwise the parse
/// fails with the offending line number.
pub fn parse_table(content: &str, delimiter: u8) -> CsvResult<Table> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut table = Table::new();
    for result in reader.deserialize::<SongRecord>() {
        let row = result.map_err(|e| CsvError::Parse {
            line: e
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default(),
            message: e.to_string(),
        })?;
        table.push(row);
    }

    Ok(table)
}

/// Load a dataset file with encoding and delimiter auto-detection.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> CsvResult<LoadResult> {
    let bytes = std::fs::read(path.as_ref())?;
    load_bytes(&bytes)
}

/// Load a dataset from raw bytes with auto-detection.
pub fn load_bytes(bytes: &[u8]) -> CsvResult<LoadResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);
    let table = parse_table(&content, delimiter)?;

    Ok(LoadResult {
        table,
        encoding,
        delimiter,
    })
}

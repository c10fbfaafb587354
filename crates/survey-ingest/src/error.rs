//! Error types for survey ingestion.

use std::path::PathBuf;

use survey_model::SchemaError;
use thiserror::Error;

/// Errors that can occur while materializing a survey table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("survey file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the maximum supported size.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Extension is neither delimited text nor a spreadsheet.
    #[error("unsupported file format: {path} (expected .csv or .xlsx)")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Input uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding}; save the file as UTF-8")]
    UnsupportedEncoding { encoding: &'static str },

    /// Failed to parse delimited text with Polars.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    /// Failed to open or read the workbook.
    #[error("failed to read spreadsheet: {message}")]
    Spreadsheet { message: String },

    /// Input has no header row or no data rows.
    #[error("input contains no data rows")]
    EmptyInput,

    /// A header cell is blank.
    #[error("column {index} has an empty header")]
    EmptyColumnName { index: usize },

    // === Schema Errors ===
    /// Input violates the survey schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

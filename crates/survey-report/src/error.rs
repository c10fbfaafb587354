//! Report and export errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing report artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook serialization failed.
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Reading a cell of the source frame failed.
    #[error("DataFrame error: {message}")]
    DataFrame { message: String },

    /// The frame does not fit in a worksheet.
    #[error("{what} count {count} exceeds the worksheet limit of {limit}")]
    SheetLimit {
        what: &'static str,
        count: usize,
        limit: usize,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<polars::prelude::PolarsError> for ExportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        ExportError::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

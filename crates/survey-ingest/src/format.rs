//! Source format detection.

use std::path::Path;

use crate::error::{IngestError, Result};

/// The two serializations a survey upload may arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text with a header row.
    Csv,
    /// Workbook; the first worksheet is read.
    Spreadsheet,
}

impl SourceFormat {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Spreadsheet),
            _ => None,
        }
    }

    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }
}

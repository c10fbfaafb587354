//! Survey file loading.

use std::path::Path;

use polars::prelude::DataFrame;
use survey_model::SurveyTable;
use tracing::{info, warn};

use crate::csv::read_csv_frame;
use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::spreadsheet::read_spreadsheet_frame;

/// Maximum source file size (500 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_SOURCE_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads a survey upload from disk; the format follows the file extension.
pub fn read_survey(path: &Path) -> Result<SurveyTable> {
    let format = SourceFormat::from_path(path)?;
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), ?format, "reading survey file");
    read_survey_bytes(bytes, format)
}

/// Materializes an uploaded blob into a survey table.
pub fn read_survey_bytes(bytes: Vec<u8>, format: SourceFormat) -> Result<SurveyTable> {
    let frame = match format {
        SourceFormat::Csv => read_csv_frame(bytes)?,
        SourceFormat::Spreadsheet => read_spreadsheet_frame(bytes)?,
    };
    validate_frame_shape(&frame)?;
    let table = SurveyTable::from_frame(frame)?;
    info!(
        rows = table.height(),
        missing_columns = table.missing_columns().len(),
        "survey table ready"
    );
    Ok(table)
}

/// Validate frame shape after loading.
///
/// Rejects frames without rows or with blank column names.
pub fn validate_frame_shape(frame: &DataFrame) -> Result<()> {
    if frame.height() == 0 {
        return Err(IngestError::EmptyInput);
    }
    if frame.width() > 500 {
        warn!(
            columns = frame.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }
    for (index, name) in frame.get_column_names().into_iter().enumerate() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName { index });
        }
    }
    Ok(())
}

fn file_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

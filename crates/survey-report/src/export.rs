//! Export of the ingested table and the JSON report.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::Serialize;
use survey_common::display_value;
use survey_model::SurveyTable;
use tracing::info;

use crate::error::{ExportError, Result};
use crate::report::Report;

/// File name of the exported workbook.
pub const EXPORT_FILE_NAME: &str = "sentiment_eda_output.xlsx";

/// MIME type of the exported workbook.
pub const EXPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const MAX_SHEET_ROWS: usize = 1_048_576;
const MAX_SHEET_COLUMNS: usize = 16_384;

/// A written export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub rows: usize,
    pub columns: usize,
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Serializes a frame into an xlsx blob: one header row, then one row per
/// record. Nulls are left as empty cells.
pub fn workbook_bytes(frame: &DataFrame) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(frame)?;
    Ok(workbook.save_to_buffer()?)
}

/// Writes the table, exactly as ingested, to
/// `output_dir/sentiment_eda_output.xlsx`.
pub fn export_workbook(table: &SurveyTable, output_dir: &Path) -> Result<ExportArtifact> {
    let path = output_dir.join(EXPORT_FILE_NAME);
    ensure_parent_dir(&path)?;
    let frame = table.frame();
    let bytes = workbook_bytes(frame)?;
    fs::write(&path, &bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = frame.height(),
        bytes = bytes.len(),
        "export workbook written"
    );
    Ok(ExportArtifact {
        path,
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        rows: frame.height(),
        columns: frame.width(),
    })
}

/// Writes the report as pretty-printed JSON.
pub fn write_json_report(report: &Report, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "JSON report written");
    Ok(())
}

fn build_workbook(frame: &DataFrame) -> Result<Workbook> {
    // One row is taken by the header.
    if frame.height() >= MAX_SHEET_ROWS {
        return Err(ExportError::SheetLimit {
            what: "row",
            count: frame.height(),
            limit: MAX_SHEET_ROWS - 1,
        });
    }
    if frame.width() > MAX_SHEET_COLUMNS {
        return Err(ExportError::SheetLimit {
            what: "column",
            count: frame.width(),
            limit: MAX_SHEET_COLUMNS,
        });
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    for (col, column) in frame.get_columns().iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, column.name().as_str(), &header)?;
        for idx in 0..column.len() {
            write_cell(sheet, idx as u32 + 1, col, column.get(idx)?)?;
        }
    }
    Ok(workbook)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: AnyValue<'_>) -> Result<()> {
    match value {
        AnyValue::Null => {}
        AnyValue::Boolean(v) => {
            sheet.write_boolean(row, col, v)?;
        }
        AnyValue::Int8(v) => {
            sheet.write_number(row, col, f64::from(v))?;
        }
        AnyValue::Int16(v) => {
            sheet.write_number(row, col, f64::from(v))?;
        }
        AnyValue::Int32(v) => {
            sheet.write_number(row, col, f64::from(v))?;
        }
        AnyValue::Int64(v) => {
            sheet.write_number(row, col, v as f64)?;
        }
        AnyValue::UInt8(v) => {
            sheet.write_number(row, col, f64::from(v))?;
        }
        AnyValue::UInt16(v) => {
            sheet.write_number(row, col, f64::from(v))?;
        }
        AnyValue::UInt32(v) => {
            sheet.write_number(row, col, f64::from(v))?;
        }
        AnyValue::UInt64(v) => {
            sheet.write_number(row, col, v as f64)?;
        }
        AnyValue::Float32(v) if v.is_finite() => {
            sheet.write_number(row, col, f64::from(v))?;
        }
        AnyValue::Float64(v) if v.is_finite() => {
            sheet.write_number(row, col, v)?;
        }
        AnyValue::Float32(_) | AnyValue::Float64(_) => {}
        other => {
            sheet.write_string(row, col, display_value(other))?;
        }
    }
    Ok(())
}

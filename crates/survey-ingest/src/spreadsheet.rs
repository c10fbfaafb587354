//! Workbook reading via calamine.
//!
//! The first worksheet is read. Its first row holds column names; each
//! column becomes `Float64` when every non-empty cell is numeric and
//! `String` otherwise. Text cells holding a null marker count as empty.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use survey_common::format_numeric;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::markers::is_null_marker;

/// Parses the first worksheet of a workbook into a frame.
pub fn read_spreadsheet_frame(bytes: Vec<u8>) -> Result<DataFrame> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| IngestError::Spreadsheet {
            message: e.to_string(),
        })?;
    let sheet_names = workbook.sheet_names();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::EmptyInput)?
        .map_err(|e| IngestError::Spreadsheet {
            message: e.to_string(),
        })?;
    debug!(
        sheet = sheet_names.first().map(String::as_str).unwrap_or_default(),
        rows = range.height(),
        columns = range.width(),
        "worksheet loaded"
    );

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptyInput);
    };
    let names = header
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let name = header_name(cell);
            if name.is_empty() {
                Err(IngestError::EmptyColumnName { index })
            } else {
                Ok(name)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    let body: Vec<&[Data]> = rows.collect();

    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(index, name)| build_column(name, body.iter().map(|row| row.get(index))))
        .collect();
    Ok(DataFrame::new(columns)?)
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_numeric(*f),
        other => other.to_string().trim().to_string(),
    }
}

fn build_column<'a>(name: &str, cells: impl Iterator<Item = Option<&'a Data>>) -> Column {
    let cells: Vec<Option<&Data>> = cells.collect();
    let numeric = cells.iter().flatten().all(|cell| match cell {
        Data::Int(_) | Data::Float(_) | Data::Empty | Data::Error(_) => true,
        Data::String(s) => is_null_marker(s),
        _ => false,
    });
    if numeric {
        let values: Vec<Option<f64>> = cells
            .into_iter()
            .map(|cell| cell.and_then(cell_number))
            .collect();
        Series::new(name.into(), values).into_column()
    } else {
        let values: Vec<Option<String>> = cells
            .into_iter()
            .map(|cell| cell.and_then(cell_text))
            .collect();
        Series::new(name.into(), values).into_column()
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        _ => None,
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() || is_null_marker(s) => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_numeric(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_become_floats() {
        let cells = [Data::Float(25.0), Data::Empty, Data::Int(40)];
        let column = build_column("Q1_Age", cells.iter().map(Some));

        assert_eq!(column.dtype(), &polars::prelude::DataType::Float64);
        assert_eq!(column.null_count(), 1);
    }

    #[test]
    fn null_markers_do_not_make_a_column_text() {
        let cells = [
            Data::Float(25.0),
            Data::String("NA".to_string()),
            Data::String("n/a".to_string()),
        ];
        let column = build_column("Q1_Age", cells.iter().map(Some));

        assert_eq!(column.dtype(), &polars::prelude::DataType::Float64);
        assert_eq!(column.null_count(), 2);
    }

    #[test]
    fn mixed_columns_become_text() {
        let cells = [
            Data::String("Yes".to_string()),
            Data::Float(1.0),
            Data::String(String::new()),
        ];
        let column = build_column("Q5_CarOwnership", cells.iter().map(Some));

        assert_eq!(column.dtype(), &polars::prelude::DataType::String);
        assert_eq!(column.null_count(), 1);
    }

    #[test]
    fn header_names_are_trimmed() {
        assert_eq!(header_name(&Data::String(" Q2_Gender ".to_string())), "Q2_Gender");
        assert_eq!(header_name(&Data::Empty), "");
    }

    #[test]
    fn garbage_bytes_are_a_spreadsheet_error() {
        let result = read_spreadsheet_frame(b"not a workbook".to_vec());

        assert!(matches!(result, Err(IngestError::Spreadsheet { .. })));
    }
}

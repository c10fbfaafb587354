//! The typed, immutable in-memory survey table.

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame};
use serde::Serialize;
use survey_common::{NumericCell, any_to_number, any_to_text, display_value};
use tracing::{debug, warn};

use crate::error::{AnalysisError, Result, SchemaError};
use crate::schema::{CategoricalColumn, NumericColumn, SurveyColumn, TextColumn};

/// One uploaded survey dataset.
///
/// Schema columns are coerced once when the table is built; aggregations
/// read them through the typed accessors and never touch the frame. The
/// source frame is kept as ingested so the export writes back exactly what
/// was read, including any non-schema columns.
#[derive(Debug, Clone)]
pub struct SurveyTable {
    frame: DataFrame,
    numeric: BTreeMap<NumericColumn, Vec<Option<f64>>>,
    categorical: BTreeMap<CategoricalColumn, Vec<Option<String>>>,
    text: BTreeMap<TextColumn, Vec<Option<String>>>,
    missing: Vec<SurveyColumn>,
}

impl SurveyTable {
    /// Validates a frame against the survey schema and builds the table.
    ///
    /// Absent schema columns are recorded, not rejected; each metric that
    /// needs one reports it on its own.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidNumber`] when a numeric column holds a
    /// non-empty value that is not a number.
    pub fn from_frame(frame: DataFrame) -> std::result::Result<Self, SchemaError> {
        let mut numeric = BTreeMap::new();
        let mut categorical = BTreeMap::new();
        let mut text = BTreeMap::new();
        let mut missing = Vec::new();

        for column in SurveyColumn::ALL {
            let Ok(source) = frame.column(column.name()) else {
                if column.is_optional() {
                    debug!(column = column.name(), "optional column absent");
                } else {
                    warn!(column = column.name(), "schema column absent");
                }
                missing.push(column);
                continue;
            };
            match column {
                SurveyColumn::Numeric(id) => {
                    numeric.insert(id, coerce_numeric(source, id.name())?);
                }
                SurveyColumn::Categorical(id) => {
                    categorical.insert(id, coerce_text(source)?);
                }
                SurveyColumn::Text(id) => {
                    text.insert(id, coerce_text(source)?);
                }
            }
        }

        debug!(
            rows = frame.height(),
            columns = frame.width(),
            missing = missing.len(),
            "survey table materialized"
        );
        Ok(Self {
            frame,
            numeric,
            categorical,
            text,
            missing,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// The source frame, unmodified.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Schema columns that were absent from the source.
    pub fn missing_columns(&self) -> &[SurveyColumn] {
        &self.missing
    }

    pub fn has_column(&self, column: SurveyColumn) -> bool {
        !self.missing.contains(&column)
    }

    /// Values of a numeric column, `None` where the cell was null.
    pub fn numeric(&self, column: NumericColumn) -> Result<&[Option<f64>]> {
        self.numeric
            .get(&column)
            .map(Vec::as_slice)
            .ok_or_else(|| AnalysisError::missing(column.name()))
    }

    /// Values of a categorical column, verbatim.
    pub fn categorical(&self, column: CategoricalColumn) -> Result<&[Option<String>]> {
        self.categorical
            .get(&column)
            .map(Vec::as_slice)
            .ok_or_else(|| AnalysisError::missing(column.name()))
    }

    /// Values of a free-text column, or `None` when the column is absent.
    pub fn text(&self, column: TextColumn) -> Option<&[Option<String>]> {
        self.text.get(&column).map(Vec::as_slice)
    }

    /// First `rows` rows of the source frame rendered as display strings.
    pub fn preview(&self, rows: usize) -> TablePreview {
        let columns: Vec<String> = self
            .frame
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        let take = rows.min(self.frame.height());
        let mut preview_rows = Vec::with_capacity(take);
        for idx in 0..take {
            let row = self
                .frame
                .get_columns()
                .iter()
                .map(|col| col.get(idx).map(display_value).unwrap_or_default())
                .collect();
            preview_rows.push(row);
        }
        TablePreview {
            columns,
            rows: preview_rows,
            total_rows: self.frame.height(),
        }
    }
}

/// Leading rows of the table, for the "sample data" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

fn coerce_numeric(
    source: &Column,
    name: &'static str,
) -> std::result::Result<Vec<Option<f64>>, SchemaError> {
    let mut values = Vec::with_capacity(source.len());
    for row in 0..source.len() {
        match any_to_number(source.get(row)?) {
            NumericCell::Null => values.push(None),
            NumericCell::Number(value) => values.push(Some(value)),
            NumericCell::Invalid(value) => {
                return Err(SchemaError::InvalidNumber {
                    column: name,
                    row,
                    value,
                });
            }
        }
    }
    Ok(values)
}

fn coerce_text(source: &Column) -> std::result::Result<Vec<Option<String>>, SchemaError> {
    let mut values = Vec::with_capacity(source.len());
    for row in 0..source.len() {
        values.push(any_to_text(source.get(row)?));
    }
    Ok(values)
}

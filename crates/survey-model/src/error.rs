//! Error types for survey analysis.

use thiserror::Error;

/// Errors raised by individual aggregations.
///
/// Every variant is local to the metric that raised it: the caller skips
/// that one view and keeps computing the rest of the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A column the aggregation needs is not present in the table.
    #[error("required column '{column}' not found")]
    MissingColumn { column: &'static str },

    /// The column exists but holds no usable (non-null) values.
    #[error("column '{column}' has no data")]
    EmptyData { column: &'static str },

    /// The statistic is mathematically undefined for the input.
    #[error("{statistic} not available: {reason}")]
    UndefinedStatistic {
        statistic: String,
        reason: String,
    },
}

impl AnalysisError {
    pub fn missing(column: &'static str) -> Self {
        Self::MissingColumn { column }
    }

    pub fn empty(column: &'static str) -> Self {
        Self::EmptyData { column }
    }

    pub fn undefined(statistic: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UndefinedStatistic {
            statistic: statistic.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Schema violations found while materializing a [`crate::SurveyTable`].
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A non-empty cell in a numeric column is not a number.
    #[error("column '{column}' row {row}: '{value}' is not a number")]
    InvalidNumber {
        column: &'static str,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for SchemaError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_the_column() {
        let err = AnalysisError::missing("Q7_Employed");
        assert_eq!(err.to_string(), "required column 'Q7_Employed' not found");
    }

    #[test]
    fn undefined_statistic_display() {
        let err = AnalysisError::undefined("correlation", "zero variance in Q1_Age");
        assert_eq!(
            err.to_string(),
            "correlation not available: zero variance in Q1_Age"
        );
    }

    #[test]
    fn schema_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Q1_Age".into());
        let err: SchemaError = polars_err.into();
        assert!(matches!(err, SchemaError::DataFrame { .. }));
    }
}

//! Aggregations over categorical columns.

use std::collections::{BTreeMap, BTreeSet};

use survey_model::{
    AnalysisError, CategoricalColumn, CategoryCount, CrossTab, Distribution, Result, SurveyTable,
};
use tracing::debug;

/// Value counts of a categorical column.
///
/// Ordered by count descending; equal counts are ordered by label so the
/// output does not depend on row order.
///
/// # Errors
///
/// `MissingColumn` when the column is absent, `EmptyData` when every value
/// is null.
pub fn distribution(table: &SurveyTable, column: CategoricalColumn) -> Result<Distribution> {
    let values = table.categorical(column)?;
    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    let mut excluded = 0usize;
    for value in values {
        match value {
            Some(label) => *tally.entry(label.as_str()).or_default() += 1,
            None => excluded += 1,
        }
    }
    if tally.is_empty() {
        return Err(AnalysisError::empty(column.name()));
    }

    let mut counts: Vec<CategoryCount> = tally
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    debug!(column = column.name(), categories = counts.len(), "distribution computed");
    Ok(Distribution {
        column: column.name(),
        counts,
        excluded,
    })
}

/// Counts of co-occurring category pairs.
///
/// Only rows where both values are present contribute. Labels on each axis
/// are those seen in contributing rows, sorted; every combination is filled,
/// with zero where the pair never occurs.
///
/// # Errors
///
/// `MissingColumn` when either column is absent, `EmptyData` when no row has
/// both values.
pub fn cross_tabulation(
    table: &SurveyTable,
    rows: CategoricalColumn,
    cols: CategoricalColumn,
) -> Result<CrossTab> {
    let row_values = table.categorical(rows)?;
    let col_values = table.categorical(cols)?;

    let mut pairs: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    let mut row_labels = BTreeSet::new();
    let mut col_labels = BTreeSet::new();
    let mut excluded = 0usize;
    for (row, col) in row_values.iter().zip(col_values) {
        let (Some(row), Some(col)) = (row, col) else {
            excluded += 1;
            continue;
        };
        row_labels.insert(row.as_str());
        col_labels.insert(col.as_str());
        *pairs.entry((row.as_str(), col.as_str())).or_default() += 1;
    }
    if pairs.is_empty() {
        let column = if row_values.iter().all(Option::is_none) {
            rows
        } else {
            cols
        };
        return Err(AnalysisError::empty(column.name()));
    }

    let counts = row_labels
        .iter()
        .map(|row| {
            col_labels
                .iter()
                .map(|col| pairs.get(&(*row, *col)).copied().unwrap_or(0))
                .collect()
        })
        .collect();
    Ok(CrossTab {
        row_column: rows.name(),
        col_column: cols.name(),
        row_labels: row_labels.into_iter().map(str::to_string).collect(),
        col_labels: col_labels.into_iter().map(str::to_string).collect(),
        counts,
        excluded,
    })
}

//! Group-by aggregations keyed on a categorical column.
//!
//! Groups are the distinct non-null values of the grouping column, ordered
//! by label. Rows with a null group value are counted in `excluded` and
//! contribute to no group.

use std::collections::{BTreeMap, BTreeSet};

use survey_model::{
    AnalysisError, BoxPlot, BoxStats, CategoricalColumn, GroupMeans, GroupProportions,
    GroupedMean, MeanCell, NumericColumn, PivotMean, ProportionCell, Proportions, Result,
    SurveyTable,
};
use tracing::debug;

use crate::stats::{mean, quantile};

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    observations: usize,
    excluded: usize,
}

impl Accumulator {
    fn push(&mut self, value: Option<f64>) {
        match value {
            Some(value) => {
                self.sum += value;
                self.observations += 1;
            }
            None => self.excluded += 1,
        }
    }

    fn mean(self) -> Option<f64> {
        if self.observations == 0 {
            None
        } else {
            Some(self.sum / self.observations as f64)
        }
    }
}

/// Per-group arithmetic mean of each value column.
///
/// A group with no non-null values for a column reports that cell as
/// undefined (`None`), not zero.
///
/// # Errors
///
/// `MissingColumn` naming the first absent column (group column first),
/// `EmptyData` when the group column holds no values.
pub fn grouped_mean(
    table: &SurveyTable,
    group: CategoricalColumn,
    values: &[NumericColumn],
) -> Result<GroupedMean> {
    let keys = table.categorical(group)?;
    let columns = values
        .iter()
        .map(|column| table.numeric(*column))
        .collect::<Result<Vec<_>>>()?;

    let mut groups: BTreeMap<&str, Vec<Accumulator>> = BTreeMap::new();
    let mut excluded = 0usize;
    for (row, key) in keys.iter().enumerate() {
        let Some(key) = key else {
            excluded += 1;
            continue;
        };
        let cells = groups
            .entry(key.as_str())
            .or_insert_with(|| vec![Accumulator::default(); columns.len()]);
        for (cell, column) in cells.iter_mut().zip(&columns) {
            cell.push(column[row]);
        }
    }
    if groups.is_empty() {
        return Err(AnalysisError::empty(group.name()));
    }

    debug!(group = group.name(), groups = groups.len(), "grouped mean computed");
    Ok(GroupedMean {
        group_column: group.name(),
        value_columns: values.iter().map(|column| column.name()).collect(),
        groups: groups
            .into_iter()
            .map(|(label, cells)| GroupMeans {
                group: label.to_string(),
                cells: cells
                    .into_iter()
                    .map(|acc| MeanCell {
                        mean: acc.mean(),
                        observations: acc.observations,
                        excluded: acc.excluded,
                    })
                    .collect(),
            })
            .collect(),
        excluded,
    })
}

/// Per-group share of each binary column equal to `positive`.
///
/// Matching is exact string equality: no trimming, no case folding. Null
/// answers are left out of the denominator; a group with no answers for a
/// column reports that cell as undefined.
///
/// # Errors
///
/// `MissingColumn` naming the first absent column, `EmptyData` when the
/// group column holds no values.
pub fn proportion_by_group(
    table: &SurveyTable,
    group: CategoricalColumn,
    binary: &[CategoricalColumn],
    positive: &str,
) -> Result<Proportions> {
    let keys = table.categorical(group)?;
    let columns = binary
        .iter()
        .map(|column| table.categorical(*column))
        .collect::<Result<Vec<_>>>()?;

    let mut groups: BTreeMap<&str, Vec<ProportionCell>> = BTreeMap::new();
    let mut excluded = 0usize;
    for (row, key) in keys.iter().enumerate() {
        let Some(key) = key else {
            excluded += 1;
            continue;
        };
        let cells = groups.entry(key.as_str()).or_insert_with(|| {
            vec![
                ProportionCell {
                    proportion: None,
                    positives: 0,
                    observations: 0,
                    excluded: 0,
                };
                columns.len()
            ]
        });
        for (cell, column) in cells.iter_mut().zip(&columns) {
            match &column[row] {
                Some(answer) => {
                    cell.observations += 1;
                    if answer == positive {
                        cell.positives += 1;
                    }
                }
                None => cell.excluded += 1,
            }
        }
    }
    if groups.is_empty() {
        return Err(AnalysisError::empty(group.name()));
    }

    let groups = groups
        .into_iter()
        .map(|(label, mut cells)| {
            for cell in &mut cells {
                if cell.observations > 0 {
                    cell.proportion = Some(cell.positives as f64 / cell.observations as f64);
                }
            }
            GroupProportions {
                group: label.to_string(),
                cells,
            }
        })
        .collect();
    Ok(Proportions {
        group_column: group.name(),
        value_columns: binary.iter().map(|column| column.name()).collect(),
        positive_label: positive.to_string(),
        groups,
        excluded,
    })
}

/// Five-number summary of a numeric column per group.
///
/// Groups without any non-null value are omitted, as a box plot has nothing
/// to draw for them.
///
/// # Errors
///
/// `MissingColumn` when either column is absent, `EmptyData` when no row has
/// both a group and a value. The error names the group column when it is
/// entirely null and the value column otherwise.
pub fn box_summary(
    table: &SurveyTable,
    group: CategoricalColumn,
    value: NumericColumn,
) -> Result<BoxPlot> {
    let keys = table.categorical(group)?;
    let values = table.numeric(value)?;

    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut excluded = 0usize;
    for (key, observed) in keys.iter().zip(values) {
        let (Some(key), Some(observed)) = (key, observed) else {
            excluded += 1;
            continue;
        };
        groups.entry(key.as_str()).or_default().push(*observed);
    }
    if groups.is_empty() {
        if keys.iter().all(Option::is_none) {
            return Err(AnalysisError::empty(group.name()));
        }
        return Err(AnalysisError::empty(value.name()));
    }

    let groups = groups
        .into_iter()
        .map(|(label, mut observed)| {
            observed.sort_by(f64::total_cmp);
            BoxStats {
                group: label.to_string(),
                observations: observed.len(),
                min: observed[0],
                q1: quantile(&observed, 0.25),
                median: quantile(&observed, 0.5),
                q3: quantile(&observed, 0.75),
                max: observed[observed.len() - 1],
            }
        })
        .collect();
    Ok(BoxPlot {
        group_column: group.name(),
        value_column: value.name(),
        groups,
        excluded,
    })
}

/// Mean of `value` for every combination of `rows` and `cols`, unstacked.
///
/// Labels come from rows where both keys are present. Combinations with no
/// non-null values are undefined.
///
/// # Errors
///
/// `MissingColumn` when any column is absent, `EmptyData` when no row has
/// both keys.
pub fn pivot_mean(
    table: &SurveyTable,
    rows: CategoricalColumn,
    cols: CategoricalColumn,
    value: NumericColumn,
) -> Result<PivotMean> {
    let row_keys = table.categorical(rows)?;
    let col_keys = table.categorical(cols)?;
    let values = table.numeric(value)?;

    let mut row_labels = BTreeSet::new();
    let mut col_labels = BTreeSet::new();
    let mut cells: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    let mut excluded = 0usize;
    for ((row, col), reading) in row_keys.iter().zip(col_keys).zip(values) {
        let (Some(row), Some(col)) = (row, col) else {
            excluded += 1;
            continue;
        };
        row_labels.insert(row.as_str());
        col_labels.insert(col.as_str());
        let observed = cells.entry((row.as_str(), col.as_str())).or_default();
        match reading {
            Some(reading) => observed.push(*reading),
            None => excluded += 1,
        }
    }
    if row_labels.is_empty() {
        let column = if row_keys.iter().all(Option::is_none) {
            rows
        } else {
            cols
        };
        return Err(AnalysisError::empty(column.name()));
    }

    let grid = row_labels
        .iter()
        .map(|row| {
            col_labels
                .iter()
                .map(|col| cells.get(&(*row, *col)).and_then(|observed| mean(observed)))
                .collect()
        })
        .collect();
    Ok(PivotMean {
        row_column: rows.name(),
        col_column: cols.name(),
        value_column: value.name(),
        row_labels: row_labels.into_iter().map(str::to_string).collect(),
        col_labels: col_labels.into_iter().map(str::to_string).collect(),
        cells: grid,
        excluded,
    })
}

//! Aggregation results handed from the analysis engine to the renderer.
//!
//! Every result carries an `excluded` count: rows dropped because a value
//! the statistic needed was null. Nulls never count as zero.

use serde::Serialize;

/// Count of one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Value counts of a categorical column.
///
/// Ordered by count descending, ties broken by label ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub column: &'static str,
    pub counts: Vec<CategoryCount>,
    pub excluded: usize,
}

impl Distribution {
    /// Count for `label`, zero when the label never occurs.
    pub fn count(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|entry| entry.count).sum()
    }
}

/// One equal-width histogram bucket. `upper` is exclusive except on the last bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bucketed counts plus summary statistics of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub column: &'static str,
    pub bins: Vec<HistogramBin>,
    pub observations: usize,
    pub excluded: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Pearson correlation of two numeric columns, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correlation {
    pub x_column: &'static str,
    pub y_column: &'static str,
    pub coefficient: f64,
    pub observations: usize,
    pub excluded: usize,
}

/// Mean of one value column within one group. `mean` is `None` when the
/// group has no non-null values for the column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanCell {
    pub mean: Option<f64>,
    pub observations: usize,
    pub excluded: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMeans {
    pub group: String,
    /// One cell per entry of [`GroupedMean::value_columns`].
    pub cells: Vec<MeanCell>,
}

/// Per-group means of several numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedMean {
    pub group_column: &'static str,
    pub value_columns: Vec<&'static str>,
    pub groups: Vec<GroupMeans>,
    /// Rows whose group value was null.
    pub excluded: usize,
}

impl GroupedMean {
    pub fn cell(&self, group: &str, value_column: &str) -> Option<&MeanCell> {
        let idx = self.value_columns.iter().position(|c| *c == value_column)?;
        self.groups
            .iter()
            .find(|g| g.group == group)
            .and_then(|g| g.cells.get(idx))
    }

    pub fn mean(&self, group: &str, value_column: &str) -> Option<f64> {
        self.cell(group, value_column).and_then(|cell| cell.mean)
    }

    pub fn group_labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.group.as_str()).collect()
    }
}

/// Contingency table of two categorical columns.
///
/// Every (row, column) label combination is present; combinations that never
/// occur hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    pub row_column: &'static str,
    pub col_column: &'static str,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub counts: Vec<Vec<usize>>,
    pub excluded: usize,
}

impl CrossTab {
    pub fn count(&self, row: &str, col: &str) -> usize {
        let Some(r) = self.row_labels.iter().position(|label| label == row) else {
            return 0;
        };
        let Some(c) = self.col_labels.iter().position(|label| label == col) else {
            return 0;
        };
        self.counts[r][c]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Share of positive answers in one group for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionCell {
    pub proportion: Option<f64>,
    pub positives: usize,
    pub observations: usize,
    pub excluded: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupProportions {
    pub group: String,
    pub cells: Vec<ProportionCell>,
}

/// Per-group share of rows matching a positive label, per binary column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proportions {
    pub group_column: &'static str,
    pub value_columns: Vec<&'static str>,
    pub positive_label: String,
    pub groups: Vec<GroupProportions>,
    pub excluded: usize,
}

impl Proportions {
    pub fn proportion(&self, group: &str, value_column: &str) -> Option<f64> {
        let idx = self.value_columns.iter().position(|c| *c == value_column)?;
        self.groups
            .iter()
            .find(|g| g.group == group)
            .and_then(|g| g.cells.get(idx))
            .and_then(|cell| cell.proportion)
    }
}

/// Five-number summary of a numeric column within one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub group: String,
    pub observations: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
    pub group_column: &'static str,
    pub value_column: &'static str,
    pub groups: Vec<BoxStats>,
    pub excluded: usize,
}

/// Two-way grouped mean, unstacked into a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotMean {
    pub row_column: &'static str,
    pub col_column: &'static str,
    pub value_column: &'static str,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
    pub excluded: usize,
}

impl PivotMean {
    pub fn mean(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.row_labels.iter().position(|label| label == row)?;
        let c = self.col_labels.iter().position(|label| label == col)?;
        self.cells[r][c]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub hue: Option<String>,
    pub size: Option<f64>,
}

/// Paired observations of two numeric columns with optional encodings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub x_column: &'static str,
    pub y_column: &'static str,
    pub hue_column: Option<&'static str>,
    pub size_column: Option<&'static str>,
    pub points: Vec<ScatterPoint>,
    /// Pearson coefficient over the plotted points, when defined.
    pub correlation: Option<f64>,
    pub excluded: usize,
}

/// Any derived statistic computed from a survey table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregationResult {
    Distribution(Distribution),
    Histogram(Histogram),
    Correlation(Correlation),
    GroupedMean(GroupedMean),
    CrossTab(CrossTab),
    Proportions(Proportions),
    BoxPlot(BoxPlot),
    PivotMean(PivotMean),
    Scatter(Scatter),
}

impl AggregationResult {
    /// Rows left out of the statistic because of nulls.
    pub fn excluded(&self) -> usize {
        match self {
            AggregationResult::Distribution(r) => r.excluded,
            AggregationResult::Histogram(r) => r.excluded,
            AggregationResult::Correlation(r) => r.excluded,
            AggregationResult::GroupedMean(r) => r.excluded,
            AggregationResult::CrossTab(r) => r.excluded,
            AggregationResult::Proportions(r) => r.excluded,
            AggregationResult::BoxPlot(r) => r.excluded,
            AggregationResult::PivotMean(r) => r.excluded,
            AggregationResult::Scatter(r) => r.excluded,
        }
    }
}

macro_rules! impl_from_result {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AggregationResult {
                fn from(value: $variant) -> Self {
                    AggregationResult::$variant(value)
                }
            }
        )*
    };
}

impl_from_result!(
    Distribution,
    Histogram,
    Correlation,
    GroupedMean,
    CrossTab,
    Proportions,
    BoxPlot,
    PivotMean,
    Scatter,
);

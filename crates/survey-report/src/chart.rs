//! Chart specifications.
//!
//! A [`ChartSpec`] says how a result should be drawn: which chart type and
//! which columns feed its axes and encodings. Drawing itself is left to
//! whichever front end consumes the report.

use serde::Serialize;
use survey_model::AggregationResult;

/// Chart type for one report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Binned counts with a density overlay.
    Histogram,
    Bar,
    /// One bar per series within each group.
    GroupedBar,
    Table,
    Scatter,
    /// Scatter with a fitted linear trend.
    Regression,
    BoxPlot,
    /// A single headline number.
    Statistic,
    WordCloud,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "histogram",
            ChartKind::Bar => "bar",
            ChartKind::GroupedBar => "grouped bar",
            ChartKind::Table => "table",
            ChartKind::Scatter => "scatter",
            ChartKind::Regression => "regression",
            ChartKind::BoxPlot => "box plot",
            ChartKind::Statistic => "statistic",
            ChartKind::WordCloud => "word cloud",
        }
    }
}

/// Axes and encodings of a chart.
///
/// `series` lists the value columns (or pivoted labels) drawn side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: String,
    pub y: Option<String>,
    pub hue: Option<String>,
    pub size: Option<String>,
    pub series: Vec<String>,
}

impl ChartSpec {
    fn new(kind: ChartKind, x: &str) -> Self {
        Self {
            kind,
            x: x.to_string(),
            y: None,
            hue: None,
            size: None,
            series: Vec::new(),
        }
    }

    fn with_y(mut self, y: &str) -> Self {
        self.y = Some(y.to_string());
        self
    }

    fn with_series<S: AsRef<str>>(mut self, series: &[S]) -> Self {
        self.series = series.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Derives axes from the columns a result was computed over.
    pub fn for_result(kind: ChartKind, result: &AggregationResult) -> Self {
        match result {
            AggregationResult::Distribution(r) => Self::new(kind, r.column).with_y("count"),
            AggregationResult::Histogram(r) => Self::new(kind, r.column).with_y("count"),
            AggregationResult::Correlation(r) => Self::new(kind, r.x_column).with_y(r.y_column),
            AggregationResult::GroupedMean(r) => {
                Self::new(kind, r.group_column).with_series(&r.value_columns)
            }
            AggregationResult::CrossTab(r) => Self::new(kind, r.row_column).with_y(r.col_column),
            AggregationResult::Proportions(r) => {
                Self::new(kind, r.group_column).with_series(&r.value_columns)
            }
            AggregationResult::BoxPlot(r) => Self::new(kind, r.group_column).with_y(r.value_column),
            AggregationResult::PivotMean(r) => {
                let mut spec = Self::new(kind, r.row_column)
                    .with_y(r.value_column)
                    .with_series(&r.col_labels);
                spec.hue = Some(r.col_column.to_string());
                spec
            }
            AggregationResult::Scatter(r) => {
                let mut spec = Self::new(kind, r.x_column).with_y(r.y_column);
                spec.hue = r.hue_column.map(str::to_string);
                spec.size = r.size_column.map(str::to_string);
                spec
            }
        }
    }

    /// Word cloud over one free-text column.
    pub fn word_cloud(column: &str) -> Self {
        Self::new(ChartKind::WordCloud, column)
    }
}

//! Survey data model.
//!
//! Defines the fixed survey schema, the typed [`SurveyTable`] materialized
//! once per upload, and the result types that flow from the analysis engine
//! to the renderer.

pub mod error;
pub mod options;
pub mod results;
pub mod schema;
pub mod table;
pub mod text;

pub use error::{AnalysisError, Result, SchemaError};
pub use options::AnalysisOptions;
pub use results::{
    AggregationResult, BoxPlot, BoxStats, CategoryCount, Correlation, CrossTab, Distribution,
    GroupMeans, GroupProportions, GroupedMean, Histogram, HistogramBin, MeanCell, PivotMean,
    ProportionCell, Proportions, Scatter, ScatterPoint,
};
pub use schema::{CategoricalColumn, ColumnKind, NumericColumn, SurveyColumn, TextColumn};
pub use table::{SurveyTable, TablePreview};
pub use text::{TextCorpus, TextSummary, WordFrequencyModel, WordWeight};

//! Survey aggregation engine.
//!
//! Every operation here is a pure function over a borrowed
//! [`SurveyTable`](survey_model::SurveyTable): no mutation, no hidden state,
//! and no dependency on how results are rendered. Each call is isolated, so
//! a failed metric never prevents the next one from being computed.
//!
//! # Null handling
//!
//! Null values are excluded from every denominator and counted in the
//! result's `excluded` field. They are never treated as zero.

mod categorical;
mod grouped;
mod numeric;
mod stats;
mod text;

pub use categorical::{cross_tabulation, distribution};
pub use grouped::{box_summary, grouped_mean, pivot_mean, proportion_by_group};
pub use numeric::{numeric_histogram, pearson_correlation, scatter_series};
pub use text::{summarize_text, summarize_text_columns};

//! Configuration options for report generation.

use serde::{Deserialize, Serialize};

/// Default number of histogram buckets.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Default label counted as positive by proportion metrics.
pub const DEFAULT_POSITIVE_LABEL: &str = "Yes";

/// Default cap on words kept per word-frequency model.
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Default number of rows in the sample-data preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Tunables for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub histogram_bins: usize,
    /// Matched exactly and case-sensitively.
    pub positive_label: String,
    pub max_words: usize,
    pub preview_rows: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            positive_label: DEFAULT_POSITIVE_LABEL.to_string(),
            max_words: DEFAULT_MAX_WORDS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    #[must_use]
    pub fn with_positive_label(mut self, label: impl Into<String>) -> Self {
        self.positive_label = label.into();
        self
    }

    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }
}

//! Text frequency summarizer.
//!
//! Builds the raw corpus for each open-ended question. Tokenizing and
//! weighting belong to the renderer; this stage only decides whether there
//! is anything to visualize.

use survey_model::{SurveyTable, TextColumn, TextCorpus, TextSummary};
use tracing::debug;

/// Joins the non-null responses of `column` with single spaces, in row order.
///
/// An absent column is treated like an all-null one: both yield
/// [`TextSummary::NoData`], never an empty corpus.
pub fn summarize_text(table: &SurveyTable, column: TextColumn) -> TextSummary {
    let Some(values) = table.text(column) else {
        debug!(column = column.name(), "text column absent");
        return TextSummary::NoData { column };
    };

    let responses: Vec<&str> = values.iter().flatten().map(String::as_str).collect();
    let text = responses.join(" ");
    if text.is_empty() {
        return TextSummary::NoData { column };
    }
    TextSummary::Corpus(TextCorpus {
        column,
        responses: responses.len(),
        excluded: values.len() - responses.len(),
        text,
    })
}

/// Summarizes all five open-ended questions in questionnaire order.
pub fn summarize_text_columns(table: &SurveyTable) -> Vec<TextSummary> {
    TextColumn::ALL
        .iter()
        .map(|column| summarize_text(table, *column))
        .collect()
}

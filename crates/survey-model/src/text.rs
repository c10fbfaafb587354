//! Free-text corpora and word-frequency models.

use serde::Serialize;

use crate::schema::TextColumn;

/// Non-null responses of one free-text column joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextCorpus {
    pub column: TextColumn,
    pub text: String,
    pub responses: usize,
    pub excluded: usize,
}

/// Output of the text summarizer for one column.
///
/// `NoData` is distinct from a corpus that later yields no words: the first
/// means there was nothing to visualize, the second is a valid empty view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TextSummary {
    NoData { column: TextColumn },
    Corpus(TextCorpus),
}

impl TextSummary {
    pub fn column(&self) -> TextColumn {
        match self {
            TextSummary::NoData { column } => *column,
            TextSummary::Corpus(corpus) => corpus.column,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, TextSummary::NoData { .. })
    }

    pub fn corpus(&self) -> Option<&TextCorpus> {
        match self {
            TextSummary::NoData { .. } => None,
            TextSummary::Corpus(corpus) => Some(corpus),
        }
    }
}

/// Weight of one token relative to the most frequent token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
    pub weight: f64,
}

/// Token weights for one free-text column, heaviest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordFrequencyModel {
    pub column: TextColumn,
    pub words: Vec<WordWeight>,
}

impl WordFrequencyModel {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn weight(&self, word: &str) -> Option<f64> {
        self.words.iter().find(|w| w.word == word).map(|w| w.weight)
    }

    pub fn count(&self, word: &str) -> usize {
        self.words
            .iter()
            .find(|w| w.word == word)
            .map_or(0, |w| w.count)
    }
}

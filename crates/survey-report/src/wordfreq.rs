//! Word-frequency weighting for open-ended responses.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use survey_model::{TextCorpus, WordFrequencyModel, WordWeight};
use tracing::debug;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("token pattern is valid"));

/// Common English words left out of word clouds.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers",
    "herself", "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just",
    "k", "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not",
    "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd",
    "she'll", "she's", "should", "shouldn't", "since", "so", "some", "such", "than", "that",
    "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
    "therefore", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Splits a corpus into lower-cased tokens.
///
/// Tokens are runs of at least two word characters or apostrophes starting
/// with a word character. A trailing `'s` is stripped; purely numeric tokens
/// and stop words are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .filter_map(|m| {
            let lowered = m.as_str().to_lowercase();
            let token = lowered.strip_suffix("'s").unwrap_or(&lowered);
            if token.chars().all(char::is_numeric) || is_stopword(token) {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}

/// Weights the tokens of a corpus relative to the most frequent one.
///
/// Words are ordered by count descending, ties by word ascending, and
/// truncated to `max_words`. A corpus whose tokens are all filtered out
/// gives an empty model.
pub fn word_frequencies(corpus: &TextCorpus, max_words: usize) -> WordFrequencyModel {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(&corpus.text) {
        *counts.entry(token).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);

    let top = ranked.first().map_or(1, |(_, count)| *count) as f64;
    let words: Vec<WordWeight> = ranked
        .into_iter()
        .map(|(word, count)| WordWeight {
            weight: count as f64 / top,
            word,
            count,
        })
        .collect();
    debug!(
        column = corpus.column.name(),
        words = words.len(),
        "word frequencies computed"
    );
    WordFrequencyModel {
        column: corpus.column,
        words,
    }
}

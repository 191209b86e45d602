//! Stopword lists for the word-frequency chart
//!
//! Function words dominate the raw counts of any article. When enabled, they
//! are dropped before counting, using the lists of the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::LANGUAGE;

fn language_for(code: &str) -> LANGUAGE {
    match code.trim().to_ascii_lowercase().as_str() {
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "pl" | "polish" => LANGUAGE::Polish,
        // "en" and anything unrecognized
        _ => LANGUAGE::English,
    }
}

/// A set of lowercase words to leave out of the chart
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Built-in list for a language code such as `"en"` or `"de"`
    ///
    /// Unknown codes get the English list.
    pub fn new(language: &str) -> Self {
        Self {
            words: stop_words::get(language_for(language))
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// A filter that drops nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// A filter over a caller-supplied list, e.g. wire-service names
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.extend(words);
        filter
    }

    /// Add more words to the filter
    pub fn extend(&mut self, words: &[&str]) {
        self.words.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Case-insensitive membership test
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    /// Drop stopwords from a token list, keeping order
    pub fn retain_content_words(&self, mut tokens: Vec<String>) -> Vec<String> {
        tokens.retain(|t| !self.is_stopword(t));
        tokens
    }

    /// Number of words in the filter
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the filter drops nothing
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

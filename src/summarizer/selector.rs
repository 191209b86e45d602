//! Top-N sentence selection for summarization
//!
//! Picks the highest-ranked sentences and restores document order so the
//! summary reads in the article's own sequence.

use crate::pagerank::PageRankResult;
use crate::types::{Sentence, DEFAULT_TOP_N};
use serde::Serialize;

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences the selection was made from
    pub candidates: usize,
}

impl SummaryResult {
    /// Selected sentence texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// Selected sentence indices in document order
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }
}

/// A selected sentence with its rank score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    /// Position in the article
    pub index: usize,
    /// Sentence text
    pub text: String,
    /// Rank score
    pub score: f64,
}

/// Top-N sentence selector
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector returning the default number of sentences
    pub fn new() -> Self {
        Self {
            num_sentences: DEFAULT_TOP_N,
        }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Number of sentences this selector returns at most
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Select the best-ranked sentences, returned in document order
    ///
    /// `ranking.scores[i]` is the score of `sentences[i]`. Equal scores prefer
    /// the earlier sentence.
    pub fn select(&self, sentences: &[Sentence], ranking: &PageRankResult) -> SummaryResult {
        let mut selected: Vec<SelectedSentence> = ranking
            .top_n(self.num_sentences)
            .into_iter()
            .filter_map(|(idx, score)| {
                sentences.get(idx).map(|s| SelectedSentence {
                    index: s.index,
                    text: s.text.clone(),
                    score,
                })
            })
            .collect();

        // Sort by document order
        selected.sort_by_key(|s| s.index);

        SummaryResult {
            sentences: selected,
            candidates: sentences.len(),
        }
    }
}

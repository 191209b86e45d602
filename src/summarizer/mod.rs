//! Summarization components
//!
//! Extractive summarization by TextRank: sentences are scored by PageRank over
//! their similarity graph and the best ones are returned in document order.

pub mod selector;

use crate::graph::similarity::SimilarityMatrix;
use crate::nlp::tokenizer::AlphabeticTokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::pipeline::traits::WordTokenizer;
use crate::types::{Sentence, SummarizerConfig};
use selector::{SentenceSelector, SummaryResult};

/// TextRank sentence summarizer
#[derive(Debug, Clone, Default)]
pub struct TextRankSummarizer {
    pagerank: StandardPageRank,
    selector: SentenceSelector,
}

impl TextRankSummarizer {
    /// Create a summarizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            pagerank: StandardPageRank::from_config(config),
            selector: SentenceSelector::new().with_num_sentences(config.top_n),
        }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.selector = self.selector.with_num_sentences(n);
        self
    }

    /// Replace the rank iterator settings
    pub fn with_pagerank(mut self, pagerank: StandardPageRank) -> Self {
        self.pagerank = pagerank;
        self
    }

    /// Build the similarity matrix and score every sentence
    pub fn rank(&self, sentences: &[Sentence]) -> (SimilarityMatrix, PageRankResult) {
        let matrix = SimilarityMatrix::build(sentences);
        let ranking = self.pagerank.run_matrix(&matrix);
        (matrix, ranking)
    }

    /// Summarize prepared sentences
    pub fn summarize(&self, sentences: &[Sentence]) -> SummaryResult {
        let (_, ranking) = self.rank(sentences);
        self.selector.select(sentences, &ranking)
    }

    /// Summarize raw sentence strings, deriving word sets with `tokenizer`
    pub fn summarize_with<T, S>(&self, texts: &[S], tokenizer: &T) -> SummaryResult
    where
        T: WordTokenizer + ?Sized,
        S: AsRef<str>,
    {
        let sentences: Vec<Sentence> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::from_text(t.as_ref(), i, tokenizer))
            .collect();
        self.summarize(&sentences)
    }

    /// Summarize raw sentence strings with the default alphabetic word sets
    pub fn summarize_texts<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        self.summarize_with(texts, &AlphabeticTokenizer::new())
            .sentences
            .into_iter()
            .map(|s| s.text)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cats_and_dogs_summary() {
        let summary = TextRankSummarizer::new()
            .with_num_sentences(2)
            .summarize_texts(&["cats chase mice", "dogs chase cats", "birds fly high"]);

        assert_eq!(summary, vec!["cats chase mice", "dogs chase cats"]);
    }

    #[test]
    fn test_single_sentence() {
        let summary = TextRankSummarizer::new().summarize_texts(&["Only this."]);
        assert_eq!(summary, vec!["Only this."]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(TextRankSummarizer::new().summarize_texts(&empty).is_empty());
    }

    #[test]
    fn test_rank_is_idempotent() {
        let texts = [
            "The central bank raised interest rates.",
            "Interest rates now stand at five percent.",
            "The bank expects inflation to ease.",
            "A storm hit the coast.",
        ];
        let tokenizer = AlphabeticTokenizer::new();
        let sentences: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::from_text(*t, i, &tokenizer))
            .collect();
        let summarizer = TextRankSummarizer::new();

        assert_eq!(summarizer.rank(&sentences), summarizer.rank(&sentences));
    }

    #[test]
    fn test_from_config() {
        let config = SummarizerConfig::default().with_top_n(1).with_max_iterations(3);
        let summarizer = TextRankSummarizer::from_config(&config);
        let tokenizer = AlphabeticTokenizer::new();

        let result =
            summarizer.summarize_with(&["a b", "b c", "c d", "x y"], &tokenizer);
        assert_eq!(result.len(), 1);
        assert_eq!(result.candidates, 4);
    }
}

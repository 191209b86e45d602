//! Sentence splitting and word tokenization
//!
//! Default implementations of [`SentenceSplitter`] and [`WordTokenizer`].
//! Sentences follow Unicode sentence boundaries (UAX #29); words are maximal
//! runs of ASCII letters taken from the lowercased text.

use crate::pipeline::traits::{SentenceSplitter, WordTokenizer};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+").expect("word pattern is a valid regex"));

/// Alphabetic word tokenizer with a minimum token length
///
/// A length filter over maximal `[a-z]+` runs is equivalent to matching
/// `[a-z]{n,}` directly, since a run shorter than `n` can never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabeticTokenizer {
    min_length: usize,
}

impl Default for AlphabeticTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphabeticTokenizer {
    /// Tokenizer keeping every alphabetic run (used for sentence word sets)
    pub fn new() -> Self {
        Self { min_length: 1 }
    }

    /// Tokenizer keeping runs of at least `min_length` letters
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(1),
        }
    }

    /// Minimum token length
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl WordTokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| w.len() >= self.min_length)
            .map(String::from)
            .collect()
    }
}

/// Sentence splitter based on Unicode sentence boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

//! Core types for news_textrank
//!
//! Sentences with their word sets, word counts for the chart, and the
//! summarizer configuration.

use crate::errors::{Result, SummarizeError};
use crate::pipeline::traits::WordTokenizer;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the article, with the word set used for similarity
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// The sentence text as produced by the splitter
    pub text: String,
    /// Position in the document (0-indexed)
    pub index: usize,
    /// Deduplicated lowercase alphabetic words
    pub words: FxHashSet<String>,
}

impl Sentence {
    /// Create a sentence from an already computed word set
    pub fn new(text: impl Into<String>, index: usize, words: FxHashSet<String>) -> Self {
        Self {
            text: text.into(),
            index,
            words,
        }
    }

    /// Create a sentence, deriving its word set from the text
    pub fn from_text<T: WordTokenizer + ?Sized>(
        text: impl Into<String>,
        index: usize,
        tokenizer: &T,
    ) -> Self {
        let text = text.into();
        let words = tokenizer.tokenize(&text).into_iter().collect();
        Self { text, index, words }
    }

    /// Number of distinct words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of words shared with another sentence
    pub fn shared_words(&self, other: &Sentence) -> usize {
        let (small, large) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };
        small.iter().filter(|w| large.contains(*w)).count()
    }
}

// ============================================================================
// Word counts
// ============================================================================

/// A word and the number of times it occurs in the article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Lowercase word
    pub word: String,
    /// Occurrences in the article text
    pub count: usize,
}

impl WordCount {
    /// Create a new word count
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Damping factor used unless configured otherwise
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Fixed number of ranking sweeps
pub const DEFAULT_MAX_ITERATIONS: usize = 50;
/// Sentences in a summary
pub const DEFAULT_TOP_N: usize = 5;
/// Words shown in the chart
pub const DEFAULT_TOP_K_WORDS: usize = 15;
/// Shortest word counted for the chart
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
/// HTTP timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Configuration for summarization and word reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Damping factor for the rank iteration
    pub damping: f64,
    /// Iteration budget; every sweep runs unless a threshold is set
    pub max_iterations: usize,
    /// Optional L1 convergence threshold (stop once delta <= threshold)
    #[serde(default)]
    pub convergence_threshold: Option<f64>,
    /// Number of summary sentences
    pub top_n: usize,
    /// Number of words in the frequency chart
    pub top_k_words: usize,
    /// Minimum word length counted for the chart
    pub min_word_length: usize,
    /// Timeout for the page fetch
    pub fetch_timeout_secs: u64,
    /// Drop stopwords before counting words for the chart
    #[serde(default)]
    pub exclude_stopwords: bool,
    /// Stopword language code (e.g., "en", "de")
    pub language: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: None,
            top_n: DEFAULT_TOP_N,
            top_k_words: DEFAULT_TOP_K_WORDS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            exclude_stopwords: false,
            language: "en".to_string(),
        }
    }
}

impl SummarizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if let Some(threshold) = self.convergence_threshold {
            if !(threshold > 0.0 && threshold.is_finite()) {
                return Err(SummarizeError::invalid_config(format!(
                    "convergence_threshold must be a positive number, got {}",
                    threshold
                )));
            }
        }

        if self.min_word_length == 0 {
            return Err(SummarizeError::invalid_config("min_word_length must be >= 1"));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(SummarizeError::invalid_config(
                "fetch_timeout_secs must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set iteration budget
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Builder method: stop early once the L1 delta drops to `threshold`
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = Some(threshold);
        self
    }

    /// Builder method: set summary length
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Builder method: set chart size
    pub fn with_top_k_words(mut self, k: usize) -> Self {
        self.top_k_words = k;
        self
    }

    /// Builder method: set minimum chart word length
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Builder method: set fetch timeout
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Builder method: exclude stopwords from the chart
    pub fn with_exclude_stopwords(mut self, exclude: bool) -> Self {
        self.exclude_stopwords = exclude;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

//! Word frequency counting for the "Top Words" chart

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::AlphabeticTokenizer;
use crate::pipeline::traits::WordTokenizer;
use crate::types::{SummarizerConfig, WordCount, DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_K_WORDS};
use rustc_hash::FxHashMap;

/// Count tokens and return the `k` most frequent
///
/// Equal counts are ordered by first occurrence in `tokens`.
pub fn top_k(tokens: &[String], k: usize) -> Vec<WordCount> {
    // word -> (count, first position)
    let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    for (pos, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(k);

    ranked
        .into_iter()
        .map(|(word, (count, _))| WordCount::new(word, count))
        .collect()
}

/// Builds the word-frequency report of an article
#[derive(Debug, Clone)]
pub struct FrequencyReporter {
    top_k: usize,
    min_length: usize,
    stopwords: Option<StopwordFilter>,
}

impl Default for FrequencyReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyReporter {
    /// Reporter with the default chart size and word length
    pub fn new() -> Self {
        Self {
            top_k: DEFAULT_TOP_K_WORDS,
            min_length: DEFAULT_MIN_WORD_LENGTH,
            stopwords: None,
        }
    }

    /// Create from a summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            top_k: config.top_k_words,
            min_length: config.min_word_length,
            stopwords: config
                .exclude_stopwords
                .then(|| StopwordFilter::new(&config.language)),
        }
    }

    /// Set the number of words reported
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Drop these stopwords before counting
    pub fn with_stopwords(mut self, filter: StopwordFilter) -> Self {
        self.stopwords = Some(filter);
        self
    }

    /// Count the most frequent words in `text`
    pub fn report(&self, text: &str) -> Vec<WordCount> {
        self.report_tokens(AlphabeticTokenizer::new().tokenize(text))
    }

    /// Count the most frequent of already tokenized words
    ///
    /// Tokens shorter than the minimum length, and stopwords when a filter is
    /// set, are dropped before counting.
    pub fn report_tokens(&self, mut tokens: Vec<String>) -> Vec<WordCount> {
        tokens.retain(|t| t.len() >= self.min_length);
        if let Some(filter) = &self.stopwords {
            tokens = filter.retain_content_words(tokens);
        }
        top_k(&tokens, self.top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_top_k_orders_by_count() {
        let counts = top_k(&words("b a b c b a"), 2);

        assert_eq!(counts, vec![WordCount::new("b", 3), WordCount::new("a", 2)]);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let counts = top_k(&words("zeta alpha mid alpha zeta mid"), 3);

        let order: Vec<&str> = counts.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_top_k_zero_and_empty() {
        assert!(top_k(&words("a b c"), 0).is_empty());
        assert!(top_k(&[], 15).is_empty());
    }

    #[test]
    fn test_report_skips_short_words() {
        let reporter = FrequencyReporter::new();
        let counts = reporter.report("The vote: a win. The win is big, the vote was close.");

        assert_eq!(counts[0], WordCount::new("the", 3));
        assert!(counts.iter().all(|c| c.word.len() >= 3));
        assert!(!counts.iter().any(|c| c.word == "is"));
    }

    #[test]
    fn test_report_with_stopwords() {
        let reporter = FrequencyReporter::new().with_stopwords(StopwordFilter::new("en"));
        let counts = reporter.report("The vote and the win and the vote.");

        assert_eq!(counts[0], WordCount::new("vote", 2));
        assert!(!counts.iter().any(|c| c.word == "the" || c.word == "and"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let text = "Rain fell. Wind blew. Rain and wind and snow and hail fell.";
        let reporter = FrequencyReporter::new().with_top_k(4);

        let first = reporter.report(text);
        for _ in 0..10 {
            assert_eq!(reporter.report(text), first);
        }
        assert_eq!(
            first,
            vec![
                WordCount::new("and", 3),
                WordCount::new("rain", 2),
                WordCount::new("fell", 2),
                WordCount::new("wind", 2),
            ]
        );
    }

    #[test]
    fn test_report_tokens_applies_min_length() {
        let counts = FrequencyReporter::new().report_tokens(words("us us us war war"));
        assert_eq!(counts, vec![WordCount::new("war", 2)]);
    }

    #[test]
    fn test_from_config_limits_size() {
        let config = SummarizerConfig::default().with_top_k_words(1);
        let counts = FrequencyReporter::from_config(&config).report("one two two three");

        assert_eq!(counts, vec![WordCount::new("two", 2)]);
    }
}

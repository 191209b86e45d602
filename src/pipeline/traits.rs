//! Capability traits for the pipeline's collaborators.
//!
//! Each trait represents one boundary between the ranking core and the
//! outside world: the network, HTML, sentence segmentation, word
//! tokenization, and chart output. The pipeline is generic over all of them,
//! so the core can be exercised with in-memory fakes and no network, HTML,
//! or terminal dependency.

use crate::errors::Result;
use crate::types::WordCount;
use url::Url;

// ============================================================================
// PageFetcher: raw HTML for a URL
// ============================================================================

/// Fetches the raw HTML of a page.
///
/// # Contract
///
/// - One attempt per call; no retries.
/// - Transport errors, timeouts and non-2xx statuses are returned as errors.
pub trait PageFetcher {
    /// Fetch the page body as text.
    fn fetch(&self, url: &Url) -> Result<String>;
}

// ============================================================================
// TextExtractor: article text out of HTML
// ============================================================================

/// Extracts readable article text from an HTML document.
pub trait TextExtractor {
    /// Return the article text; empty when the page has none.
    fn extract(&self, html: &str) -> String;
}

// ============================================================================
// SentenceSplitter: text into sentences
// ============================================================================

/// Splits article text into sentences.
///
/// # Contract
///
/// - Sentences are returned in document order.
/// - Returned sentences are non-empty.
pub trait SentenceSplitter {
    /// Split text into sentences.
    fn split(&self, text: &str) -> Vec<String>;
}

// ============================================================================
// WordTokenizer: text into word tokens
// ============================================================================

/// Turns text into lowercase word tokens, in order, duplicates included.
pub trait WordTokenizer {
    /// Tokenize text.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// ============================================================================
// ChartRenderer: word counts to a chart
// ============================================================================

/// Renders labeled counts as a bar chart.
pub trait ChartRenderer {
    /// Draw one chart. `counts` is already ordered and truncated.
    fn render(&mut self, title: &str, counts: &[WordCount]) -> Result<()>;
}

impl<T: WordTokenizer + ?Sized> WordTokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }
}

impl<T: SentenceSplitter + ?Sized> SentenceSplitter for &T {
    fn split(&self, text: &str) -> Vec<String> {
        (**self).split(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WhitespaceTokenizer;

    impl WordTokenizer for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(|w| w.to_lowercase()).collect()
        }
    }

    struct LineSplitter;

    impl SentenceSplitter for LineSplitter {
        fn split(&self, text: &str) -> Vec<String> {
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect()
        }
    }

    #[test]
    fn test_custom_tokenizer_via_reference() {
        let tokenizer = WhitespaceTokenizer;
        let by_ref = &tokenizer;
        assert_eq!(by_ref.tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_splitter_as_trait_object() {
        let splitter: Box<dyn SentenceSplitter> = Box::new(LineSplitter);
        assert_eq!(splitter.split("one\n\n two \n"), vec!["one", "two"]);
    }

    #[test]
    fn test_recording_chart_renderer() {
        #[derive(Default)]
        struct Recorder(Vec<(String, usize)>);

        impl ChartRenderer for Recorder {
            fn render(&mut self, title: &str, counts: &[WordCount]) -> Result<()> {
                self.0.push((title.to_string(), counts.len()));
                Ok(())
            }
        }

        let mut recorder = Recorder::default();
        recorder
            .render("Top Words", &[WordCount::new("news", 2)])
            .unwrap();
        assert_eq!(recorder.0, vec![("Top Words".to_string(), 1)]);
    }
}

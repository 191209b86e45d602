//! Paragraph text extraction from HTML

use crate::pipeline::traits::TextExtractor;
use scraper::{Html, Selector};

/// Extracts the text of every `<p>` element
///
/// Text fragments inside a paragraph are trimmed and joined by single
/// spaces, then paragraphs are joined the same way. Empty paragraphs are
/// skipped.
#[derive(Debug, Clone)]
pub struct ParagraphExtractor {
    selector: Selector,
}

impl Default for ParagraphExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParagraphExtractor {
    /// Create a paragraph extractor
    pub fn new() -> Self {
        Self {
            selector: Selector::parse("p").expect("`p` is a valid CSS selector"),
        }
    }

    /// Text of each non-empty paragraph, in document order
    pub fn paragraphs(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .map(|p| {
                p.text()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl TextExtractor for ParagraphExtractor {
    fn extract(&self, html: &str) -> String {
        let paragraphs = self.paragraphs(html);
        tracing::debug!(paragraphs = paragraphs.len(), "extracted paragraphs");
        paragraphs.join(" ")
    }
}

//! # news_textrank
//!
//! Extractive summarization of news articles with TextRank.
//!
//! A page is fetched, its paragraph text split into sentences, and sentences
//! are scored by PageRank over their word-overlap similarity graph. The
//! best-scoring sentences are returned in document order. The most frequent
//! words of the article are reported alongside, for a bar chart.
//!
//! ## Example
//!
//! ```rust
//! use news_textrank::TextRankSummarizer;
//!
//! let summary = TextRankSummarizer::new()
//!     .with_num_sentences(2)
//!     .summarize_texts(&["cats chase mice", "dogs chase cats", "birds fly high"]);
//!
//! assert_eq!(summary, vec!["cats chase mice", "dogs chase cats"]);
//! ```

pub mod errors;
pub mod fetch;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod report;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{Sentence, SummarizerConfig, WordCount};

// Re-export main functionality
pub use fetch::{extract::ParagraphExtractor, HttpFetcher};
pub use graph::{csr::CsrGraph, similarity::SimilarityMatrix};
pub use nlp::{
    stopwords::StopwordFilter,
    tokenizer::{AlphabeticTokenizer, UnicodeSentenceSplitter},
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{
    ArticleSummary, ChartRenderer, DefaultNewsPipeline, NewsPipeline, PageFetcher,
    SentenceSplitter, TextExtractor, WordTokenizer,
};
pub use report::{chart::TerminalBarChart, frequency::FrequencyReporter};
pub use summarizer::{
    selector::{SelectedSentence, SentenceSelector, SummaryResult},
    TextRankSummarizer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

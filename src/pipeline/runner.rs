//! Pipeline runner: runs the stages in order and threads their output.
//!
//! The [`NewsPipeline`] struct holds a statically-composed set of
//! collaborators. [`NewsPipeline::summarize_url`] runs them in order:
//!
//! 1. Fetch the page
//! 2. Extract paragraph text
//! 3. Split sentences
//! 4. Rank sentences and select the summary
//! 5. Count words for the chart
//!
//! Rendering the chart is a separate call so the caller can print the
//! summary first.
//!
//! # Static dispatch
//!
//! `NewsPipeline` is generic over every collaborator, so tests swap in
//! in-memory fakes without boxing. Use [`DefaultNewsPipeline::from_config`]
//! for the HTTP + HTML + terminal stack.

use crate::errors::Result;
use crate::fetch::extract::ParagraphExtractor;
use crate::fetch::HttpFetcher;
use crate::nlp::tokenizer::{AlphabeticTokenizer, UnicodeSentenceSplitter};
use crate::pipeline::traits::{
    ChartRenderer, PageFetcher, SentenceSplitter, TextExtractor, WordTokenizer,
};
use crate::report::chart::TerminalBarChart;
use crate::report::frequency::FrequencyReporter;
use crate::report::CHART_TITLE;
use crate::summarizer::selector::SummaryResult;
use crate::summarizer::TextRankSummarizer;
use crate::types::{Sentence, SummarizerConfig, WordCount};
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Enter a tracing span for a pipeline stage; it closes at the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Everything produced for one article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    /// Source URL, when the article was fetched
    pub url: Option<String>,
    /// Number of sentences found in the article
    pub sentence_count: usize,
    /// Selected sentences in document order
    pub summary: SummaryResult,
    /// Most frequent words, most frequent first
    pub top_words: Vec<WordCount>,
}

impl ArticleSummary {
    /// Summary sentences, one per line
    pub fn summary_text(&self) -> String {
        self.summary.texts().join("\n")
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A pipeline composed of concrete collaborators.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `F` | [`PageFetcher`] | [`HttpFetcher`] |
/// | `X` | [`TextExtractor`] | [`ParagraphExtractor`] |
/// | `S` | [`SentenceSplitter`] | [`UnicodeSentenceSplitter`] |
/// | `W` | [`WordTokenizer`] | [`AlphabeticTokenizer`] |
/// | `C` | [`ChartRenderer`] | [`TerminalBarChart`] |
#[derive(Debug)]
pub struct NewsPipeline<F, X, S, W, C> {
    pub fetcher: F,
    pub extractor: X,
    pub splitter: S,
    pub tokenizer: W,
    pub renderer: C,
    config: SummarizerConfig,
    summarizer: TextRankSummarizer,
    reporter: FrequencyReporter,
}

/// Type alias for the HTTP + HTML + terminal pipeline.
pub type DefaultNewsPipeline = NewsPipeline<
    HttpFetcher,
    ParagraphExtractor,
    UnicodeSentenceSplitter,
    AlphabeticTokenizer,
    TerminalBarChart<std::io::Stdout>,
>;

impl DefaultNewsPipeline {
    /// Build the default pipeline for a validated configuration
    pub fn from_config(config: SummarizerConfig) -> Result<Self> {
        let fetcher =
            HttpFetcher::with_timeout(Duration::from_secs(config.fetch_timeout_secs))?;
        NewsPipeline::new(
            config,
            fetcher,
            ParagraphExtractor::new(),
            UnicodeSentenceSplitter,
            AlphabeticTokenizer::new(),
            TerminalBarChart::stdout(),
        )
    }
}

impl<F, X, S, W, C> NewsPipeline<F, X, S, W, C>
where
    F: PageFetcher,
    X: TextExtractor,
    S: SentenceSplitter,
    W: WordTokenizer,
    C: ChartRenderer,
{
    /// Compose a pipeline; fails if the configuration is invalid
    pub fn new(
        config: SummarizerConfig,
        fetcher: F,
        extractor: X,
        splitter: S,
        tokenizer: W,
        renderer: C,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fetcher,
            extractor,
            splitter,
            tokenizer,
            renderer,
            summarizer: TextRankSummarizer::from_config(&config),
            reporter: FrequencyReporter::from_config(&config),
            config,
        })
    }

    /// The configuration the pipeline was built with
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Fetch an article and summarize it
    pub fn summarize_url(&self, url: &Url) -> Result<ArticleSummary> {
        let html = {
            trace_stage!("fetch");
            self.fetcher.fetch(url)?
        };

        let text = {
            trace_stage!("extract");
            self.extractor.extract(&html)
        };

        let mut article = self.summarize_text(&text);
        article.url = Some(url.to_string());
        Ok(article)
    }

    /// Summarize article text that is already in hand
    pub fn summarize_text(&self, text: &str) -> ArticleSummary {
        let sentences: Vec<Sentence> = {
            trace_stage!("split");
            self.splitter
                .split(text)
                .into_iter()
                .enumerate()
                .map(|(i, s)| Sentence::from_text(s, i, &self.tokenizer))
                .collect()
        };
        tracing::debug!(sentences = sentences.len(), "split article");

        if sentences.is_empty() {
            tracing::warn!("article has no sentences; summary will be empty");
        }

        let summary = {
            trace_stage!("rank");
            self.summarizer.summarize(&sentences)
        };

        let top_words = {
            trace_stage!("frequency");
            self.reporter.report_tokens(self.tokenizer.tokenize(text))
        };

        ArticleSummary {
            url: None,
            sentence_count: sentences.len(),
            summary,
            top_words,
        }
    }

    /// Hand the word counts to the chart renderer
    pub fn render_chart(&mut self, article: &ArticleSummary) -> Result<()> {
        trace_stage!("render");
        self.renderer.render(CHART_TITLE, &article.top_words)
    }
}

//! news-textrank command line interface
//!
//! ```text
//! news-textrank "https://example.com/news-article"
//! ```
//!
//! Prints a TextRank summary of the article, then a "Top Words" bar chart.

use clap::{CommandFactory, Parser};
use news_textrank::types::{
    DEFAULT_DAMPING, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOP_K_WORDS,
    DEFAULT_TOP_N,
};
use news_textrank::fetch::parse_article_url;
use news_textrank::{DefaultNewsPipeline, Result, SummarizerConfig};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Summarize a news article with TextRank and chart its most frequent words
#[derive(Debug, Parser)]
#[command(name = "news-textrank", version)]
struct Cli {
    /// URL of the news article
    url: Option<String>,

    /// Number of summary sentences
    #[arg(short = 'n', long = "sentences", default_value_t = DEFAULT_TOP_N)]
    sentences: usize,

    /// Number of words in the chart
    #[arg(short = 'k', long = "top-words", default_value_t = DEFAULT_TOP_K_WORDS)]
    top_words: usize,

    /// Rank iteration budget
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    iterations: usize,

    /// Damping factor of the rank iteration
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Stop ranking early once the L1 change between sweeps drops to this value
    #[arg(long)]
    threshold: Option<f64>,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Leave stopwords out of the chart
    #[arg(long)]
    skip_stopwords: bool,

    /// Stopword language
    #[arg(long, default_value = "en")]
    language: String,

    /// Do not draw the chart
    #[arg(long)]
    no_chart: bool,

    /// Print the summary and word counts as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> SummarizerConfig {
        let mut config = SummarizerConfig::default()
            .with_top_n(self.sentences)
            .with_top_k_words(self.top_words)
            .with_max_iterations(self.iterations)
            .with_damping(self.damping)
            .with_fetch_timeout_secs(self.timeout)
            .with_exclude_stopwords(self.skip_stopwords)
            .with_language(self.language.clone());
        config.convergence_threshold = self.threshold;
        config
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    // Nothing useful can be reported if stdout itself is gone
    Cli::command().print_help().ok();
    println!();
}

fn run(cli: &Cli, url: &Url) -> Result<()> {
    let mut pipeline = DefaultNewsPipeline::from_config(cli.config())?;
    let article = pipeline.summarize_url(url)?;

    if cli.json {
        println!("{}", article.to_json()?);
        return Ok(());
    }

    println!("{}", article.summary_text());

    if !cli.no_chart {
        println!();
        pipeline.render_chart(&article)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    // A missing or unusable URL is a usage problem, not a failure
    let Some(raw_url) = cli.url.as_deref() else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match parse_article_url(raw_url).and_then(|url| run(&cli, &url)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_user_input() => {
            eprintln!("error: {}", err);
            print_usage();
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(?err, "summarization failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_config() {
        let cli = Cli::parse_from(["news-textrank", "https://example.com/a"]);

        assert_eq!(cli.config(), SummarizerConfig::default());
        assert_eq!(cli.url.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from([
            "news-textrank",
            "-n",
            "3",
            "--top-words",
            "10",
            "--threshold",
            "0.0001",
            "--skip-stopwords",
            "https://example.com/a",
        ]);
        let config = cli.config();

        assert_eq!(config.top_n, 3);
        assert_eq!(config.top_k_words, 10);
        assert_eq!(config.convergence_threshold, Some(0.0001));
        assert!(config.exclude_stopwords);
    }

    #[test]
    fn test_url_is_optional() {
        let cli = Cli::parse_from(["news-textrank"]);
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

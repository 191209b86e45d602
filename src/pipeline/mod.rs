//! Pipeline composition and execution.
//!
//! ## Submodules
//!
//! - [`traits`]: capability traits for the collaborators
//! - [`runner`]: stage orchestration

pub mod runner;
pub mod traits;

pub use runner::{ArticleSummary, DefaultNewsPipeline, NewsPipeline};
pub use traits::{ChartRenderer, PageFetcher, SentenceSplitter, TextExtractor, WordTokenizer};

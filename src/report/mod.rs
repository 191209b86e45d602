//! Word frequency reporting
//!
//! Counts the most frequent words of an article and renders them as a bar
//! chart.

pub mod chart;
pub mod frequency;

/// Title of the word-frequency chart
pub const CHART_TITLE: &str = "Top Words";
